//! Review comment harvesting operation.

use std::io::{self, Write};

use gleaner::{
    CommentArchive, GleanerConfig, HarvestError, HarvestOptions, HarvestSummary,
    OctocrabReviewGateway, PersonalAccessToken, RepositoryLocator, ReviewGateway, run_harvest,
};

/// Harvests review comments for the configured repository, reporting
/// progress on stdout.
///
/// # Errors
///
/// Returns [`HarvestError::MissingToken`] or [`HarvestError::Configuration`]
/// if required configuration is missing, and propagates listing and archive
/// failures from the harvest itself.
pub async fn run(config: &GleanerConfig) -> Result<(), HarvestError> {
    let timeout = config.request_timeout();
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        |token, locator| OctocrabReviewGateway::for_token(token, locator, timeout),
        &mut stdout,
    )
    .await
    .map(|_| ())
}

/// Harvests review comments using a custom gateway builder.
///
/// The token is resolved before the repository is validated, and both happen
/// before the gateway is built, so configuration errors never reach the
/// network.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &GleanerConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<HarvestSummary, HarvestError>
where
    G: ReviewGateway,
    F: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<G, HarvestError>,
    W: Write,
{
    let token = config.resolve_token()?;
    let (owner, repo) = config.require_repository_info()?;

    let locator =
        RepositoryLocator::from_owner_repo(owner, repo)?.with_api_base(&config.api_base)?;
    let gateway = build_gateway(&token, &locator)?;
    let archive = CommentArchive::new(&config.output_root(), &locator);

    let options = HarvestOptions {
        target_count: config.target_count(),
        output_mode: config.output_mode(),
        failure_policy: config.failure_policy(),
    };
    run_harvest(&gateway, &locator, &archive, options, writer).await
}

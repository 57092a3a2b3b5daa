//! Scenario state and harvest execution for the comment harvest BDD tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use camino::Utf8PathBuf;
use gleaner::{
    CommentArchive, FailurePolicy, HarvestError, HarvestOptions, HarvestSummary,
    OctocrabReviewGateway, OutputMode, PersonalAccessToken, RepositoryLocator, run_harvest,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

use super::domain::PullRequestCount;

/// Shared runtime wrapper that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct HarvestState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) output: Slot<TempDir>,
    pub(crate) progress: Slot<String>,
    pub(crate) summary: Slot<HarvestSummary>,
    pub(crate) error: Slot<HarvestError>,
}

/// Ensures the runtime, server, and output directory are initialised.
pub(crate) fn ensure_runtime_and_server(harvest_state: &HarvestState) -> SharedRuntime {
    if harvest_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        harvest_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = harvest_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if harvest_state.server.with_ref(|_| ()).is_none() {
        harvest_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    if harvest_state.output.with_ref(|_| ()).is_none() {
        let temp = TempDir::new()
            .unwrap_or_else(|error| panic!("failed to create output directory: {error}"));
        harvest_state.output.set(temp);
    }

    shared_runtime
}

/// Mounts `mock` on the scenario's server.
pub(crate) fn mount(harvest_state: &HarvestState, mock: Mock) {
    let runtime = ensure_runtime_and_server(harvest_state);
    harvest_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

/// Directory the harvest writes `owner/repo` files into.
pub(crate) fn archive_path(harvest_state: &HarvestState) -> Utf8PathBuf {
    output_root(harvest_state).join("owner_repo")
}

fn output_root(harvest_state: &HarvestState) -> Utf8PathBuf {
    harvest_state
        .output
        .with_ref(|temp| Utf8PathBuf::from_path_buf(temp.path().join("comments")))
        .unwrap_or_else(|| panic!("output directory not initialised"))
        .unwrap_or_else(|path| panic!("output directory is not UTF-8: {}", path.display()))
}

/// Runs a full harvest against the mock server and records the outcome.
pub(crate) fn run_harvest_scenario(
    harvest_state: &HarvestState,
    count: PullRequestCount,
    output_mode: OutputMode,
) {
    let runtime = ensure_runtime_and_server(harvest_state);
    let server_uri = harvest_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"));
    let root = output_root(harvest_state);
    let options = HarvestOptions {
        target_count: count.value(),
        output_mode,
        failure_policy: FailurePolicy::SkipAndContinue,
    };

    let mut progress = Vec::new();
    let result = runtime.block_on(async {
        let locator = RepositoryLocator::from_owner_repo("owner", "repo")?
            .with_api_base(&format!("{server_uri}/api/v3"))?;
        let token = PersonalAccessToken::new("ghp_example")?;
        let gateway =
            OctocrabReviewGateway::for_token(&token, &locator, Some(Duration::from_secs(5)))?;
        let archive = CommentArchive::new(&root, &locator);
        run_harvest(&gateway, &locator, &archive, options, &mut progress).await
    });

    harvest_state
        .progress
        .set(String::from_utf8_lossy(&progress).into_owned());
    match result {
        Ok(summary) => harvest_state.summary.set(summary),
        Err(error) => harvest_state.error.set(error),
    }
}

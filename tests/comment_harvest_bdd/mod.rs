//! Support modules for the comment harvest BDD tests.

pub(crate) mod domain;
pub(crate) mod state;

pub(crate) use domain::{
    ClosedListing, CommentCount, HttpStatus, PullRequestCount, PullRequestNumber,
    PullRequestOrder,
};
pub(crate) use state::{
    HarvestState, archive_path, ensure_runtime_and_server, mount, run_harvest_scenario,
};

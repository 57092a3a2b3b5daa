//! CLI operation handlers.
//!
//! - [`harvest_comments`]: wire configuration into a harvest run

pub mod harvest_comments;

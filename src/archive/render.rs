//! Plain-text rendering of review comments.

use std::io::Write;

use crate::github::{AggregatedComment, Comment, HarvestError};

/// Line closing every rendered comment.
pub const SEPARATOR: &str = "----------------------------------------";

/// Writes per-pull-request entries:
///
/// ```text
/// [<created_at>] <author>:
/// <body>
/// ----------------------------------------
/// ```
///
/// # Errors
///
/// Returns [`HarvestError::Io`] if writing to the output fails.
pub fn write_comments<W: Write>(writer: &mut W, comments: &[Comment]) -> Result<(), HarvestError> {
    for comment in comments {
        writeln!(writer, "[{}] {}:", comment.created_at, comment.author)
            .map_err(|error| io_error(&error))?;
        write_body(writer, comment)?;
    }
    Ok(())
}

/// Writes aggregate entries, prefixing each with its pull request number:
///
/// ```text
/// PR #<number> [<created_at>] <author>:
/// <body>
/// ----------------------------------------
/// ```
///
/// # Errors
///
/// Returns [`HarvestError::Io`] if writing to the output fails.
pub fn write_aggregated<W: Write>(
    writer: &mut W,
    entries: &[AggregatedComment],
) -> Result<(), HarvestError> {
    for entry in entries {
        writeln!(
            writer,
            "PR #{} [{}] {}:",
            entry.pr_number, entry.comment.created_at, entry.comment.author
        )
        .map_err(|error| io_error(&error))?;
        write_body(writer, &entry.comment)?;
    }
    Ok(())
}

fn write_body<W: Write>(writer: &mut W, comment: &Comment) -> Result<(), HarvestError> {
    writeln!(writer, "{}\n{SEPARATOR}", comment.body).map_err(|error| io_error(&error))
}

fn io_error(error: &std::io::Error) -> HarvestError {
    HarvestError::Io {
        message: error.to_string(),
    }
}

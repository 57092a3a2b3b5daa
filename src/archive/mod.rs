//! Plain-text comment archive on the local filesystem.
//!
//! Every repository gets its own directory, `<output_root>/<owner>_<repo>`.
//! [`CommentArchive`] names that directory; [`CommentArchive::open`] creates
//! it (with any missing parents) and returns an [`ArchiveDirectory`] handle
//! through which files are written. Files are always replaced, never
//! appended to, so re-running a harvest yields identical output.

pub mod render;

use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::github::{AggregatedComment, Comment, HarvestError, RepositoryLocator};

/// File name used in aggregate mode.
pub const AGGREGATE_FILE_NAME: &str = "all_pr_comments.txt";

/// Default root under which repository directories are created.
pub const DEFAULT_OUTPUT_ROOT: &str = "comments";

/// File name used for one pull request's comments.
#[must_use]
pub fn pull_request_file_name(pr_number: u64) -> String {
    format!("pr_{pr_number}_comments.txt")
}

/// Location of a repository's comment archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentArchive {
    path: Utf8PathBuf,
}

impl CommentArchive {
    /// Names the archive directory for `locator` beneath `output_root`.
    ///
    /// Nothing is created on disk until [`Self::open`] is called.
    #[must_use]
    pub fn new(output_root: &Utf8Path, locator: &RepositoryLocator) -> Self {
        Self {
            path: output_root.join(locator.archive_directory_name()),
        }
    }

    /// Directory path the archive writes into.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Creates the archive directory if needed and opens it for writing.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Io`] if the directory cannot be created or
    /// opened.
    pub fn open(&self) -> Result<ArchiveDirectory, HarvestError> {
        Dir::create_ambient_dir_all(&self.path, ambient_authority()).map_err(|error| {
            HarvestError::Io {
                message: format!("failed to create directory '{}': {error}", self.path),
            }
        })?;
        let dir = Dir::open_ambient_dir(&self.path, ambient_authority()).map_err(|error| {
            HarvestError::Io {
                message: format!("failed to open directory '{}': {error}", self.path),
            }
        })?;

        Ok(ArchiveDirectory {
            path: self.path.clone(),
            dir,
        })
    }
}

/// Open handle on an existing archive directory.
#[derive(Debug)]
pub struct ArchiveDirectory {
    path: Utf8PathBuf,
    dir: Dir,
}

impl ArchiveDirectory {
    /// Directory path this handle writes into.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Writes one pull request's comments to `pr_<n>_comments.txt`,
    /// replacing any previous file, and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Io`] if the file cannot be created or written.
    pub fn write_pull_request(
        &self,
        pr_number: u64,
        comments: &[Comment],
    ) -> Result<Utf8PathBuf, HarvestError> {
        self.write_file(&pull_request_file_name(pr_number), |writer| {
            render::write_comments(writer, comments)
        })
    }

    /// Writes the aggregate buffer to `all_pr_comments.txt` in the order
    /// given.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `entries` is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Io`] if the file cannot be created or written.
    pub fn write_aggregate(
        &self,
        entries: &[AggregatedComment],
    ) -> Result<Option<Utf8PathBuf>, HarvestError> {
        if entries.is_empty() {
            return Ok(None);
        }

        self.write_file(AGGREGATE_FILE_NAME, |writer| {
            render::write_aggregated(writer, entries)
        })
        .map(Some)
    }

    fn write_file<F>(&self, file_name: &str, render_into: F) -> Result<Utf8PathBuf, HarvestError>
    where
        F: FnOnce(&mut BufWriter<cap_std::fs_utf8::File>) -> Result<(), HarvestError>,
    {
        let path = self.path.join(file_name);
        let file = self.dir.create(file_name).map_err(|error| HarvestError::Io {
            message: format!("failed to create '{path}': {error}"),
        })?;

        let mut writer = BufWriter::new(file);
        render_into(&mut writer)?;
        writer.flush().map_err(|error| HarvestError::Io {
            message: format!("failed to write '{path}': {error}"),
        })?;

        Ok(path)
    }
}

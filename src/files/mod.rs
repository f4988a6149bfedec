// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Collaborators that supply candidate paths and their contents.
//!
//! The scan never touches the filesystem or git directly; it goes through
//! [`TrackedFileLister`] and [`FileSource`] so tests can hand it fixed,
//! in-memory data.

mod disk;
mod walk;

pub use disk::DiskSource;
pub use walk::WalkLister;

use crate::error::Result;

/// Supplies the ordered list of paths to consider.
pub trait TrackedFileLister {
    /// List candidate paths. Order is preserved into the report.
    fn list_files(&self) -> Result<Vec<String>>;
}

/// Supplies file type and content for a listed path.
pub trait FileSource {
    /// Whether `path` is a directory.
    fn is_dir(&self, path: &str) -> Result<bool>;

    /// Read the full content of `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// A fixed list, used as is.
impl TrackedFileLister for Vec<String> {
    fn list_files(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

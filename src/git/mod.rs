// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Supplies the tracked file list from the repository index.

mod repo;

pub use repo::Repository;

use std::path::PathBuf;

use crate::error::Result;
use crate::files::TrackedFileLister;

/// Lists files tracked by git under a directory, relative to it.
#[derive(Debug, Clone)]
pub struct GitLister {
    dir: PathBuf,
}

impl GitLister {
    /// List tracked files under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List tracked files under the current directory.
    pub fn current() -> Self {
        Self::new(".")
    }
}

impl TrackedFileLister for GitLister {
    fn list_files(&self) -> Result<Vec<String>> {
        let repo = Repository::open(&self.dir)?;
        let files = repo.tracked_files_under(&self.dir)?;
        tracing::debug!(
            "Listed {} tracked files under {:?} (workdir {:?})",
            files.len(),
            self.dir,
            repo.workdir()
        );
        Ok(files)
    }
}

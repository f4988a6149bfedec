// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{ListError, Result};
use git2::Repository as Git2Repo;
use std::path::{Component, Path, PathBuf};

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ListError::NotARepository
            } else {
                ListError::OpenFailed {
                    message: e.message().to_string(),
                }
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| ListError::OpenFailed {
                message: "Repository has no working directory (bare repository)".to_string(),
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Paths recorded in the index, relative to the working directory root,
    /// in index order. Entries in several conflict stages are listed once.
    pub fn index_paths(&self) -> Result<Vec<String>> {
        let index = self.inner.index().map_err(|e| ListError::IndexFailed {
            message: e.message().to_string(),
        })?;

        let mut paths: Vec<String> = Vec::with_capacity(index.len());
        for entry in index.iter() {
            let path = String::from_utf8_lossy(&entry.path).into_owned();
            if paths.last() != Some(&path) {
                paths.push(path);
            }
        }

        Ok(paths)
    }

    /// Tracked files under `dir`, relative to `dir`, the way
    /// `git ls-files` reports them when run from that directory.
    pub fn tracked_files_under(&self, dir: &Path) -> Result<Vec<String>> {
        let prefix = self.relative_prefix(dir)?;
        let paths = self.index_paths()?;

        if prefix.is_empty() {
            return Ok(paths);
        }

        Ok(paths
            .into_iter()
            .filter_map(|p| p.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }

    /// `dir` relative to the working directory, as `a/b/`, or empty at the
    /// root.
    fn relative_prefix(&self, dir: &Path) -> Result<String> {
        let canonical = |p: &Path| {
            p.canonicalize().map_err(|e| ListError::OpenFailed {
                message: format!("Failed to resolve {}: {}", p.display(), e),
            })
        };
        let dir = canonical(dir)?;
        let workdir = canonical(&self.workdir)?;

        let relative = match dir.strip_prefix(&workdir) {
            Ok(relative) => relative,
            Err(_) => return Ok(String::new()),
        };

        let mut prefix = String::new();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                prefix.push_str(&part.to_string_lossy());
                prefix.push('/');
            }
        }
        Ok(prefix)
    }
}

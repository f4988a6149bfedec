// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Directory-walk lister for trees that are not git checkouts.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ListError, Result};

use super::TrackedFileLister;

/// Directories never descended into.
const SKIP_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Lists every regular file under a root, sorted by the bytes of the full
/// relative path, the order the git index keeps.
#[derive(Debug, Clone)]
pub struct WalkLister {
    root: PathBuf,
}

impl WalkLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TrackedFileLister for WalkLister {
    fn list_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRS.contains(&name)))
            });

        for entry in walker {
            let entry = entry.map_err(|e| ListError::WalkFailed {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());
            let path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.push(path);
        }

        files.sort_unstable();
        tracing::debug!("Walked {} files under {:?}", files.len(), self.root);
        Ok(files)
    }
}

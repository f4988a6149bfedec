// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Filesystem-backed file source.

use std::path::PathBuf;

use crate::error::{FileError, Result};

use super::FileSource;

/// Reads candidate files relative to a root directory.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    /// Resolve paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve paths against the current directory.
    pub fn current() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSource for DiskSource {
    fn is_dir(&self, path: &str) -> Result<bool> {
        let metadata = std::fs::metadata(self.resolve(path)).map_err(|source| FileError::Stat {
            path: path.to_string(),
            source,
        })?;
        Ok(metadata.is_dir())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let content = std::fs::read(self.resolve(path)).map_err(|source| FileError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_and_is_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/a.go"), "hello").unwrap();

        let source = DiskSource::new(dir.path());
        assert!(source.is_dir("pkg").unwrap());
        assert!(!source.is_dir("pkg/a.go").unwrap());
        assert_eq!(source.read("pkg/a.go").unwrap(), b"hello");
    }

    #[test]
    fn test_missing_file_is_stat_error() {
        let dir = TempDir::new().unwrap();
        let source = DiskSource::new(dir.path());

        let err = source.is_dir("gone.go").unwrap_err();
        match err {
            CheckError::File(FileError::Stat { path, .. }) => assert_eq!(path, "gone.go"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            source.read("gone.go").unwrap_err(),
            CheckError::File(FileError::Read { .. })
        ));
    }
}

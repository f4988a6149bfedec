// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for checklicenses.
//!
//! Configuration and collaborator failures are fatal and travel as
//! [`CheckError`]. Files that lack a license are not errors; they are
//! collected in a report, and only the final count is surfaced here as
//! [`CheckError::Violations`] so the binary can pick its exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for checklicenses operations.
#[derive(Error, Debug)]
pub enum CheckError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Tracked file listing errors
    #[error("File listing error: {0}")]
    List(#[from] ListError),

    // Stat/read errors on candidate files
    #[error("File error: {0}")]
    File(#[from] FileError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Scan completed with non-compliant files
    #[error("{count} file(s) without an acceptable license header")]
    Violations { count: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl CheckError {
    /// Whether this error only reports license violations.
    pub fn is_violation(&self) -> bool {
        matches!(self, CheckError::Violations { .. })
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("No configuration file given and none found (looked for {searched})")]
    NotSpecified { searched: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid regexp in license #{index}: {message}")]
    InvalidLicense { index: usize, message: String },

    #[error("Invalid regexp in {kind} pattern '{pattern}': {message}")]
    InvalidPattern {
        kind: String,
        pattern: String,
        message: String,
    },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors from listing tracked files.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to read index: {message}")]
    IndexFailed { message: String },

    #[error("Failed to walk {path}: {message}")]
    WalkFailed { path: PathBuf, message: String },
}

/// Errors from stating or reading a candidate file.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("cannot stat {path}: {source}")]
    Stat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for checklicenses operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CheckError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        assert!(err.to_string().contains("/path/to/config.json"));
    }

    #[test]
    fn test_invalid_license_names_template() {
        let err = ConfigError::InvalidLicense {
            index: 2,
            message: "unclosed group".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("#2"));
        assert!(text.contains("unclosed group"));
    }

    #[test]
    fn test_file_error_names_path() {
        let err = FileError::Read {
            path: "src/lib.rs".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("src/lib.rs"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_check_error_from_config_error() {
        let config_err = ConfigError::MissingRequired {
            key: "Licenses".to_string(),
        };
        let err: CheckError = config_err.into();
        assert!(err.to_string().contains("Licenses"));
        assert!(!err.is_violation());
    }

    #[test]
    fn test_violations_flag() {
        let err = CheckError::Violations { count: 3 };
        assert!(err.is_violation());
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = res.context("init").unwrap_err();
        assert_eq!(err.to_string(), "init: gone");
    }
}

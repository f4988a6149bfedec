// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! checklicenses - License header compliance gate
//!
//! Verifies that every tracked file in a repository carries one of a
//! configured set of acceptable license headers.
//!
//! # Features
//!
//! - **Regexp License Templates**: Each acceptable header is a list of lines,
//!   each of which may use regexp syntax
//! - **Path Rules**: Ordered accept/reject patterns select the files to check
//! - **Module Prefix**: Listed paths are trimmed before matching
//! - **Git Index Listing**: Tracked files come straight from the index
//! - **Complete Reports**: Every offending file is reported, never just the first
//!
//! # Example
//!
//! ```no_run
//! use checklicenses::config::LicenseConfig;
//! use checklicenses::files::DiskSource;
//! use checklicenses::git::GitLister;
//! use checklicenses::rules::{LicenseChecker, PathStyle};
//!
//! let config = LicenseConfig::load().unwrap();
//! let checker = LicenseChecker::new(config.compile().unwrap());
//!
//! let report = checker
//!     .check(&GitLister::current(), &DiskSource::current(), PathStyle::Trimmed)
//!     .unwrap();
//! for path in &report.violations {
//!     println!("{}", path);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::{CompiledConfig, LicenseConfig};
pub use error::{CheckError, Result};
pub use rules::{ComplianceReport, LicenseChecker, PathStyle};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of checklicenses.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}

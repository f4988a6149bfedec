// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and parsing.

use crate::error::{CheckError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::LicenseConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &[
    "checklicenses.json",
    ".checklicenses.json",
    "checklicenses.toml",
    ".checklicenses.toml",
];

/// File names looked up under the user's config directory.
const USER_CONFIG_FILES: &[&str] = &["config.json", "config.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    let config_dir = dirs::config_dir()?.join("checklicenses");
    USER_CONFIG_FILES
        .iter()
        .map(|name| config_dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LicenseConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => Err(CheckError::Config(ConfigError::NotSpecified {
            searched: CONFIG_FILES.join(", "),
        })),
    }
}

/// Load configuration from a specific path.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_config_from(path: &Path) -> Result<LicenseConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CheckError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CheckError::Config(ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        parse_toml(&content)
    } else {
        parse_json(&content)
    }
}

/// Parse configuration from a JSON string.
pub fn parse_json(content: &str) -> Result<LicenseConfig> {
    serde_json::from_str(content).map_err(|e| {
        CheckError::Config(ConfigError::ParseError {
            message: format!("Cannot unmarshal JSON: {}", e),
        })
    })
}

/// Parse configuration from a TOML string.
pub fn parse_toml(content: &str) -> Result<LicenseConfig> {
    toml::from_str(content).map_err(|e| {
        CheckError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

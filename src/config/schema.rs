// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Mirrors the JSON document the tool has always read: `Licenses`, `GoPkg`,
//! `Accept` and `Reject`. The same structure is accepted from TOML.
//! Keys match case-insensitively and unknown keys are ignored.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw, uncompiled license check configuration.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct LicenseConfig {
    /// Acceptable license headers. Each header is a list of lines without
    /// the trailing newline; every line may contain regexp syntax.
    #[serde(rename = "Licenses")]
    pub licenses: Vec<Vec<String>>,

    /// Path prefix stripped from listed files before rule matching.
    /// Environment variables are expanded.
    #[serde(rename = "GoPkg")]
    pub module_prefix: String,

    /// Patterns a path must fully match to stay in scope.
    #[serde(rename = "Accept")]
    pub accept: Vec<String>,

    /// Patterns that take a fully matching path out of scope.
    #[serde(rename = "Reject")]
    pub reject: Vec<String>,
}

impl LicenseConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Compile into matching rules, expanding the prefix from the process
    /// environment.
    pub fn compile(&self) -> std::result::Result<super::CompiledConfig, crate::error::ConfigError> {
        super::compile::compile(self)
    }
}

#[derive(Clone, Copy)]
enum Field {
    Licenses,
    ModulePrefix,
    Accept,
    Reject,
}

impl Field {
    const KEYS: &'static [(&'static str, Field)] = &[
        ("Licenses", Field::Licenses),
        ("GoPkg", Field::ModulePrefix),
        ("ModulePrefix", Field::ModulePrefix),
        ("module_prefix", Field::ModulePrefix),
        ("Accept", Field::Accept),
        ("Reject", Field::Reject),
    ];

    fn from_key(key: &str) -> Option<Self> {
        Self::KEYS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, field)| *field)
    }
}

struct LicenseConfigVisitor;

impl<'de> Visitor<'de> for LicenseConfigVisitor {
    type Value = LicenseConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a license check configuration table")
    }

    fn visit_map<A>(self, mut map: A) -> Result<LicenseConfig, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = LicenseConfig::default();
        // A repeated key overwrites the earlier value.
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Some(Field::Licenses) => config.licenses = map.next_value()?,
                Some(Field::ModulePrefix) => config.module_prefix = map.next_value()?,
                Some(Field::Accept) => config.accept = map.next_value()?,
                Some(Field::Reject) => config.reject = map.next_value()?,
                None => {
                    tracing::debug!("Ignoring unknown config key {:?}", key);
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(config)
    }
}

impl<'de> Deserialize<'de> for LicenseConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LicenseConfigVisitor)
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compilation of the raw configuration into matching rules.

use regex::Regex;

use crate::error::ConfigError;
use crate::rules::{PathRule, Polarity};

use super::env::expand_with;
use super::schema::LicenseConfig;

/// Configuration compiled into regular expressions, ready for scanning.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompiledConfig {
    licenses: Vec<Regex>,
    module_prefix: String,
    rules: Vec<PathRule>,
}

impl CompiledConfig {
    /// Acceptable license patterns, in declaration order.
    pub fn licenses(&self) -> &[Regex] {
        &self.licenses
    }

    /// The expanded prefix stripped from listed paths.
    pub fn module_prefix(&self) -> &str {
        &self.module_prefix
    }

    /// Path rules: accept rules first, then reject rules, each group in
    /// declaration order.
    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }
}

/// Compile `raw`, expanding the module prefix from the process environment.
pub fn compile(raw: &LicenseConfig) -> Result<CompiledConfig, ConfigError> {
    compile_with(raw, |name| std::env::var(name).ok())
}

/// Compile `raw`, resolving prefix variables through `lookup`.
///
/// Fails on the first pattern that does not compile; no partially compiled
/// configuration is ever returned.
pub fn compile_with<F>(raw: &LicenseConfig, lookup: F) -> Result<CompiledConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if raw.licenses.is_empty() {
        return Err(ConfigError::MissingRequired {
            key: "Licenses".to_string(),
        });
    }

    let mut licenses = Vec::with_capacity(raw.licenses.len());
    for (index, lines) in raw.licenses.iter().enumerate() {
        let joined = lines.join("\n");
        let regex = Regex::new(&joined).map_err(|e| ConfigError::InvalidLicense {
            index,
            message: e.to_string(),
        })?;
        licenses.push(regex);
    }

    let mut rules = Vec::with_capacity(raw.accept.len() + raw.reject.len());
    for pattern in &raw.accept {
        rules.push(PathRule::new(pattern, Polarity::Accept)?);
    }
    for pattern in &raw.reject {
        rules.push(PathRule::new(pattern, Polarity::Reject)?);
    }

    let module_prefix = expand_with(&raw.module_prefix, lookup);
    tracing::debug!(
        licenses = licenses.len(),
        rules = rules.len(),
        prefix = %module_prefix,
        "Compiled license configuration"
    );

    Ok(CompiledConfig {
        licenses,
        module_prefix,
        rules,
    })
}

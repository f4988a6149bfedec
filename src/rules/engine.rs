// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scope classification and license verification.

use std::borrow::Cow;

use crate::config::CompiledConfig;
use crate::error::Result;
use crate::files::{FileSource, TrackedFileLister};

use super::report::ComplianceReport;
use super::rule::PathRule;

/// How non-compliant paths are written into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// With the module prefix stripped.
    #[default]
    Trimmed,
    /// Exactly as the lister produced them.
    AsListed,
}

/// Checks candidate files against a compiled configuration.
#[derive(Debug, Clone)]
pub struct LicenseChecker {
    config: CompiledConfig,
}

impl LicenseChecker {
    /// Create a checker for the given configuration.
    pub fn new(config: CompiledConfig) -> Self {
        Self { config }
    }

    /// Strip the module prefix from `path` if it starts with it.
    pub fn normalize<'p>(&self, path: &'p str) -> &'p str {
        path.strip_prefix(self.config.module_prefix()).unwrap_or(path)
    }

    /// The first rule that takes `path` out of scope, if any.
    ///
    /// Accept rules are consulted before reject rules, each in declaration
    /// order. A path must match every accept rule and no reject rule to
    /// stay in scope; with no rules at all, everything is in scope.
    pub fn excluding_rule(&self, path: &str) -> Option<&PathRule> {
        self.config.rules().iter().find(|rule| rule.excludes(path))
    }

    /// Whether a normalized path is subject to the license check.
    pub fn in_scope(&self, path: &str) -> bool {
        self.excluding_rule(path).is_none()
    }

    /// Whether `content` contains at least one acceptable license.
    ///
    /// Each byte of an invalid UTF-8 sequence reads as one U+FFFD, so a
    /// `.` in a license still matches a Latin-1 character.
    pub fn is_compliant(&self, content: &[u8]) -> bool {
        let text = decode_lossy(content);
        self.config
            .licenses()
            .iter()
            .any(|license| license.is_match(&text))
    }

    /// List files with `lister` and scan them.
    pub fn check<L, S>(
        &self,
        lister: &L,
        source: &S,
        style: PathStyle,
    ) -> Result<ComplianceReport>
    where
        L: TrackedFileLister + ?Sized,
        S: FileSource + ?Sized,
    {
        let paths = lister.list_files()?;
        self.scan(&paths, source, style)
    }

    /// Check every path in order and collect the non-compliant ones.
    ///
    /// Out-of-scope paths and directories are skipped without being read.
    /// A stat or read failure on an in-scope path aborts the scan.
    pub fn scan<S>(
        &self,
        paths: &[String],
        source: &S,
        style: PathStyle,
    ) -> Result<ComplianceReport>
    where
        S: FileSource + ?Sized,
    {
        let mut report = ComplianceReport::default();

        for path in paths {
            let trimmed = self.normalize(path);

            if let Some(rule) = self.excluding_rule(trimmed) {
                tracing::debug!(
                    path = %path,
                    rule = rule.pattern(),
                    polarity = rule.polarity().as_str(),
                    "Excluded by rule"
                );
                report.excluded += 1;
                continue;
            }

            if source.is_dir(path)? {
                tracing::debug!(path = %path, "Skipping directory");
                report.excluded += 1;
                continue;
            }

            let content = source.read(path)?;
            report.checked += 1;

            if self.is_compliant(&content) {
                tracing::debug!(path = %path, "License found");
                continue;
            }

            tracing::debug!(path = %path, "No acceptable license");
            let reported = match style {
                PathStyle::Trimmed => trimmed,
                PathStyle::AsListed => path.as_str(),
            };
            report.violations.push(reported.to_string());
        }

        tracing::info!(
            checked = report.checked,
            excluded = report.excluded,
            violations = report.violations.len(),
            "Scan complete"
        );
        Ok(report)
    }
}

/// Decode `content`, replacing every byte of an invalid sequence with
/// U+FFFD.
fn decode_lossy(content: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(content) {
        return Cow::Borrowed(text);
    }
    let mut text = String::with_capacity(content.len() + 8);
    for chunk in content.utf8_chunks() {
        text.push_str(chunk.valid());
        for _ in chunk.invalid() {
            text.push(char::REPLACEMENT_CHARACTER);
        }
    }
    Cow::Owned(text)
}

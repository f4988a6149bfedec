// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Path rules deciding which files are subject to the license check.

use regex::Regex;

use crate::error::ConfigError;

/// What a rule requires of a path for the path to stay in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// The path must match.
    Accept,
    /// The path must not match.
    Reject,
}

impl Polarity {
    /// Name used in configuration and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Accept => "accept",
            Polarity::Reject => "reject",
        }
    }
}

/// A full-match path pattern tagged with its polarity.
#[derive(Debug, Clone)]
pub struct PathRule {
    pattern: String,
    regex: Regex,
    polarity: Polarity,
}

impl PathRule {
    /// Compile `pattern` so that it must match the whole path.
    pub fn new(pattern: &str, polarity: Polarity) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ConfigError::InvalidPattern {
                kind: polarity.as_str().to_string(),
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            polarity,
        })
    }

    /// Shorthand for an accept rule.
    pub fn accept(pattern: &str) -> Result<Self, ConfigError> {
        Self::new(pattern, Polarity::Accept)
    }

    /// Shorthand for a reject rule.
    pub fn reject(pattern: &str) -> Result<Self, ConfigError> {
        Self::new(pattern, Polarity::Reject)
    }

    /// The pattern as written in the configuration.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Whether the whole of `path` matches the pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Whether this rule takes `path` out of scope: an accept rule that
    /// does not match, or a reject rule that does.
    pub fn excludes(&self, path: &str) -> bool {
        self.matches(path) == (self.polarity == Polarity::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_only() {
        let rule = PathRule::accept(r".*\.go").unwrap();
        assert!(rule.matches("cmd/main.go"));
        assert!(!rule.matches("cmd/main.go.orig"));

        let rule = PathRule::accept("cmd").unwrap();
        assert!(!rule.matches("cmd/main.go"));
    }

    #[test]
    fn test_alternation_anchored_as_a_whole() {
        let rule = PathRule::accept(r"a\.go|b\.go").unwrap();
        assert!(rule.matches("a.go"));
        assert!(rule.matches("b.go"));
        assert!(!rule.matches("a.go.bak"));
        assert!(!rule.matches("xb.go"));
    }

    #[test]
    fn test_accept_excludes_non_matching() {
        let rule = PathRule::accept(r".*\.go").unwrap();
        assert!(!rule.excludes("main.go"));
        assert!(rule.excludes("README.md"));
    }

    #[test]
    fn test_reject_excludes_matching() {
        let rule = PathRule::reject(r"vendor/.*").unwrap();
        assert!(rule.excludes("vendor/lib.go"));
        assert!(!rule.excludes("main.go"));
    }

    #[test]
    fn test_invalid_pattern_names_polarity() {
        let err = PathRule::accept("(").unwrap_err();
        assert!(err.to_string().contains("accept"));
    }
}

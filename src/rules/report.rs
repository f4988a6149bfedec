// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scan results.

use serde::Serialize;
use std::io::Write;

use crate::cli::args::OutputFormat;

/// Outcome of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    /// Files without an acceptable license, in listing order.
    pub violations: Vec<String>,
    /// Files that were read and tested.
    pub checked: usize,
    /// Files skipped by a path rule or because they are directories.
    pub excluded: usize,
}

impl ComplianceReport {
    /// Whether every checked file carries an acceptable license.
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    /// Write the report.
    ///
    /// Text output is one path per line and nothing at all for a clean
    /// scan. JSON output is always written.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> std::io::Result<()> {
        match format {
            OutputFormat::Text => {
                if !self.is_compliant() {
                    writeln!(out, "{}", self.violations.join("\n"))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Print to stdout.
    pub fn print(&self, format: OutputFormat) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock, format)
    }
}

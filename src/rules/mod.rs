// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for license checking.
//!
//! Path rules decide which files are in scope; compiled license patterns
//! decide whether an in-scope file is compliant.

mod engine;
mod report;
mod rule;

pub use engine::{LicenseChecker, PathStyle};
pub use report::ComplianceReport;
pub use rule::{PathRule, Polarity};

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::rules::PathStyle;

/// checklicenses - License header compliance gate
///
/// Lists tracked files, keeps the ones selected by the configured path
/// rules, and prints every file that carries none of the acceptable
/// license headers. Exits 1 when any file is reported, 2 on errors.
#[derive(Parser, Debug)]
#[command(name = "checklicenses")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Check that tracked files carry an acceptable license header", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file in JSON (or TOML, by extension) format
    #[arg(short, long, global = true, env = "CHECKLICENSES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print paths as listed, without stripping the module prefix
    #[arg(short, long, global = true)]
    pub absolute: bool,

    /// List files by walking the directory instead of reading the git index
    #[arg(long, global = true)]
    pub walk: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for the report
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One non-compliant path per line (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check license headers (default command)
    Check,

    /// Write an example configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }

    /// Directory files are listed and read from.
    pub fn root(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// How reported paths are written.
    pub fn path_style(&self) -> PathStyle {
        if self.absolute {
            PathStyle::AsListed
        } else {
            PathStyle::Trimmed
        }
    }
}

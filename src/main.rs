// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! checklicenses - License header compliance gate

use checklicenses::cli::{run, Cli};
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status when files lack a license.
const EXIT_VIOLATIONS: i32 = 1;
/// Exit status for configuration and I/O failures.
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        if e.is_violation() {
            tracing::debug!("{}", e);
            std::process::exit(EXIT_VIOLATIONS);
        }
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(EXIT_ERROR);
    }
}

/// Set up logging/tracing. Everything goes to stderr; stdout carries the report.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("checklicenses=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}

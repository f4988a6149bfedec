// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;

use crate::config::{self, LicenseConfig};
use crate::error::{CheckError, ConfigError, Result, ResultExt};
use crate::files::{DiskSource, TrackedFileLister, WalkLister};
use crate::git::GitLister;
use crate::rules::LicenseChecker;

use super::args::{Cli, Commands, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check => run_check(&cli),
        Commands::Init(args) => run_init(&cli, args),
        Commands::Version => run_version(),
    }
}

/// Load the configuration named on the command line, or discover one.
fn load_config(cli: &Cli) -> Result<LicenseConfig> {
    if let Some(path) = &cli.config {
        return LicenseConfig::load_from(path);
    }

    let root = cli.root();
    match config::find_config_file_from(&root) {
        Some(path) => config::load_config_from(&path),
        None => Err(CheckError::Config(ConfigError::NotSpecified {
            searched: config::CONFIG_FILES.join(", "),
        })),
    }
}

/// Run the check command.
fn run_check(cli: &Cli) -> Result<()> {
    let compiled = load_config(cli)?.compile()?;
    let checker = LicenseChecker::new(compiled);

    let root = cli.root();
    tracing::debug!("Checking files under {:?} (walk: {})", root, cli.walk);

    let lister: Box<dyn TrackedFileLister> = if cli.walk {
        Box::new(WalkLister::new(&root))
    } else {
        Box::new(GitLister::new(&root))
    };
    let source = DiskSource::new(&root);

    let report = checker.check(&*lister, &source, cli.path_style())?;
    report.print(cli.format)?;

    if report.is_compliant() {
        Ok(())
    } else {
        Err(CheckError::Violations {
            count: report.violations.len(),
        })
    }
}

/// Run the init command.
fn run_init(cli: &Cli, args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = cli.root().join(config::default::DEFAULT_CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(CheckError::Config(ConfigError::AlreadyExists { path: config_path }));
    }

    std::fs::write(&config_path, config::example_config())
        .context(format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Created {}",
        style("✓").green().bold(),
        config_path.display()
    );

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("checklicenses {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

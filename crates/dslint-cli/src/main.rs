//! # dslint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dslint_cli::check::{run_check, CheckArgs};
use dslint_cli::config::{load_config, run_config};

/// dslint — documentation structure validator.
///
/// Checks that every content file has the required frontmatter and a single
/// H1 heading, and that every content directory has a category descriptor.
#[derive(Parser, Debug)]
#[command(name = "dslint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a docs tree.
    Check(CheckArgs),

    /// Print the effective configuration as YAML.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!("dslint v{} starting", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_root = dslint_cli::find_project_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("Could not locate project root; using current directory");
        cwd.clone()
    });

    tracing::debug!(project_root = %project_root.display(), "resolved project root");

    let result = load_config(cli.config.as_deref(), &project_root).and_then(|config| {
        match cli.command {
            Commands::Check(args) => run_check(&args, config, &project_root),
            Commands::Config => run_config(&config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

//! # Check Subcommand
//!
//! Validates a docs tree and prints one line per (entity, invariant) check,
//! followed by a summary. `--format json` prints the full report instead.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use dslint_core::ValidatorConfig;
use dslint_validate::{Invariant, StructureValidator, ValidationReport};

/// Arguments for the `dslint check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Docs root to validate. Defaults to the configured `docs_dir`.
    #[arg(value_name = "DOCS_DIR")]
    pub docs_dir: Option<PathBuf>,

    /// Only run these checks. Repeatable; all checks run when omitted.
    #[arg(long = "check", value_enum, value_name = "CHECK")]
    pub checks: Vec<CheckKind>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print failing checks only (text format).
    #[arg(long)]
    pub failures_only: bool,
}

/// Selectable checks.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    /// Required frontmatter fields.
    Frontmatter,
    /// Exactly one H1 heading.
    Headings,
    /// `_category_.json` in every content directory.
    Categories,
}

impl From<CheckKind> for Invariant {
    fn from(kind: CheckKind) -> Self {
        match kind {
            CheckKind::Frontmatter => Invariant::Frontmatter,
            CheckKind::Headings => Invariant::Headings,
            CheckKind::Categories => Invariant::Category,
        }
    }
}

/// Report rendering.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per check plus a summary.
    #[default]
    Text,
    /// The full report as JSON.
    Json,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every check passes, 1 when any check fails.
/// Errors mean the run could not be performed.
pub fn run_check(args: &CheckArgs, config: ValidatorConfig, project_root: &Path) -> Result<u8> {
    let config = match &args.docs_dir {
        Some(dir) => ValidatorConfig {
            docs_dir: crate::resolve_path(dir, project_root),
            ..config
        },
        None => config,
    };

    let validator = StructureValidator::new(config)
        .with_invariants(args.checks.iter().copied().map(Invariant::from));

    tracing::info!(docs_dir = %validator.root().display(), "validating docs tree");

    let report = validator
        .run()
        .with_context(|| format!("failed to validate {}", validator.root().display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => render_text(&report, args.failures_only, &mut out)?,
        OutputFormat::Json => render_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(if report.is_success() { 0 } else { 1 })
}

/// Write the human-readable report.
pub fn render_text(
    report: &ValidationReport,
    failures_only: bool,
    out: &mut impl Write,
) -> Result<()> {
    for check in &report.checks {
        if failures_only && check.passed() {
            continue;
        }
        writeln!(out, "{check}")?;
    }

    if !report.checks.is_empty() && !(failures_only && report.is_success()) {
        writeln!(out)?;
    }
    writeln!(out, "Docs structure ({}): {report}", report.root.display())?;

    if report.failed() > 0 {
        writeln!(
            out,
            "{} check(s) failed out of {} total.",
            report.failed(),
            report.total()
        )?;
    }
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn render_json(report: &ValidationReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

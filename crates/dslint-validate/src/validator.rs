//! # Structure Validator
//!
//! Runs the enumerate → parse → check → report pipeline over one docs tree.
//! The tree is read fresh on every run and never modified.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use dslint_core::{parse_content_file, ContentFile, DslintError, ValidatorConfig};

use crate::check::{check_category, check_frontmatter, check_headings};
use crate::report::{CheckFailure, CheckResult, Invariant, Outcome, ValidationReport};
use crate::walk::{enumerate_content_bearing_directories, enumerate_content_files};

/// Validates a documentation tree against the configured invariants.
#[derive(Debug, Clone)]
pub struct StructureValidator {
    config: ValidatorConfig,
    invariants: BTreeSet<Invariant>,
}

impl StructureValidator {
    /// A validator checking every invariant.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            invariants: Invariant::ALL.into_iter().collect(),
        }
    }

    /// Restrict the run to `invariants`. An empty selection keeps all of them.
    pub fn with_invariants(mut self, invariants: impl IntoIterator<Item = Invariant>) -> Self {
        let selected: BTreeSet<Invariant> = invariants.into_iter().collect();
        if !selected.is_empty() {
            self.invariants = selected;
        }
        self
    }

    /// The configuration this validator runs with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The docs root being validated.
    pub fn root(&self) -> &Path {
        &self.config.docs_dir
    }

    fn checks(&self, invariant: Invariant) -> bool {
        self.invariants.contains(&invariant)
    }

    /// Validate the tree and return one result per (entity, invariant).
    ///
    /// # Errors
    ///
    /// Returns [`DslintError::RootNotFound`] if the docs root is not a
    /// directory and [`DslintError::Io`] if it cannot be listed. Every other
    /// problem is reported as a failed check.
    pub fn run(&self) -> Result<ValidationReport, DslintError> {
        let root = self.root();
        if !root.is_dir() {
            return Err(DslintError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut checks = Vec::new();
        let checks_files = self.checks(Invariant::Frontmatter) || self.checks(Invariant::Headings);

        if checks_files {
            let files = enumerate_content_files(root, &self.config)?;
            let parsed: Vec<(PathBuf, Result<ContentFile, DslintError>)> = files
                .paths
                .into_iter()
                .map(|path| {
                    let result = parse_content_file(&path);
                    (path, result)
                })
                .collect();

            tracing::info!(
                root = %root.display(),
                files = parsed.len(),
                "enumerated content files"
            );

            if self.checks(Invariant::Frontmatter) {
                for (path, result) in &parsed {
                    let failure = check_frontmatter(result, &self.config.required_frontmatter);
                    checks.push(self.result(Invariant::Frontmatter, path, failure));
                }
                self.push_unreadable(&mut checks, Invariant::Frontmatter, &files.unreadable);
            }

            if self.checks(Invariant::Headings) {
                for (path, result) in &parsed {
                    checks.push(self.result(Invariant::Headings, path, check_headings(result)));
                }
                self.push_unreadable(&mut checks, Invariant::Headings, &files.unreadable);
            }
        }

        if self.checks(Invariant::Category) {
            let dirs = enumerate_content_bearing_directories(root, &self.config)?;
            tracing::info!(
                root = %root.display(),
                directories = dirs.paths.len(),
                "enumerated content-bearing directories"
            );
            for dir in &dirs.paths {
                let failure = check_category(dir, &self.config.category_file);
                checks.push(self.result(Invariant::Category, dir, failure));
            }
            self.push_unreadable(&mut checks, Invariant::Category, &dirs.unreadable);
        }

        let report = ValidationReport {
            root: root.to_path_buf(),
            checks,
        };

        tracing::info!(
            total = report.total(),
            passed = report.passed(),
            failed = report.failed(),
            "validation complete"
        );
        Ok(report)
    }

    fn push_unreadable(
        &self,
        checks: &mut Vec<CheckResult>,
        invariant: Invariant,
        unreadable: &BTreeMap<PathBuf, String>,
    ) {
        for (dir, reason) in unreadable {
            let failure = CheckFailure::Filesystem {
                reason: reason.clone(),
            };
            checks.push(self.result(invariant, dir, Some(failure)));
        }
    }

    fn result(
        &self,
        invariant: Invariant,
        path: &Path,
        failure: Option<CheckFailure>,
    ) -> CheckResult {
        if let Some(failure) = &failure {
            tracing::debug!(
                invariant = %invariant,
                path = %path.display(),
                %failure,
                "check failed"
            );
        }
        CheckResult {
            invariant,
            subject: relative_subject(self.root(), path),
            outcome: Outcome::from_failure(failure),
        }
    }
}

/// `path` relative to `root`, with the root itself shown as `.`.
fn relative_subject(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

//! # Validation Report
//!
//! One [`CheckResult`] per (entity, invariant) pair. A file with missing
//! frontmatter and two H1 headings yields two independent failures, so fixing
//! one never hides the other.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dslint_core::DslintError;

/// A structural rule checked against the docs tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Invariant {
    /// Every content file declares the required frontmatter keys.
    Frontmatter,
    /// Every content file has exactly one top-level heading.
    Headings,
    /// Every content-bearing directory owns a category descriptor.
    Category,
}

impl Invariant {
    /// All invariants, in report order.
    pub const ALL: [Invariant; 3] = [Self::Frontmatter, Self::Headings, Self::Category];

    /// Stable identifier used in text and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontmatter => "frontmatter",
            Self::Headings => "headings",
            Self::Category => "category",
        }
    }

    /// Short sentence describing what a passing check means.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Frontmatter => "has required frontmatter fields",
            Self::Headings => "has exactly one H1 heading",
            Self::Category => "has a category descriptor",
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single check failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckFailure {
    /// The frontmatter block could not be decoded.
    #[error("malformed frontmatter: {reason}")]
    Parse {
        /// Decoder message.
        reason: String,
    },

    /// Required frontmatter keys are absent, in configured order.
    #[error("missing frontmatter field(s): {}", .missing.join(", "))]
    MissingFields {
        /// The absent keys.
        missing: Vec<String>,
    },

    /// Zero or several top-level headings.
    #[error("expected 1 H1 heading but found {count}")]
    HeadingCount {
        /// Number of top-level headings found.
        count: usize,
    },

    /// The directory has no category descriptor.
    #[error("missing {file}")]
    MissingDescriptor {
        /// Expected descriptor file name.
        file: String,
    },

    /// The entity could not be read.
    #[error("filesystem error: {reason}")]
    Filesystem {
        /// Underlying I/O message.
        reason: String,
    },
}

impl From<&DslintError> for CheckFailure {
    fn from(err: &DslintError) -> Self {
        match err {
            DslintError::Parse { source, .. } => Self::Parse {
                reason: source.to_string(),
            },
            DslintError::Io { source, .. } => Self::Filesystem {
                reason: source.to_string(),
            },
            other => Self::Filesystem {
                reason: other.to_string(),
            },
        }
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "failure", rename_all = "snake_case")]
pub enum Outcome {
    /// The invariant holds.
    Pass,
    /// The invariant is violated.
    Fail(CheckFailure),
}

impl Outcome {
    /// Build from an optional failure.
    pub fn from_failure(failure: Option<CheckFailure>) -> Self {
        failure.map_or(Self::Pass, Self::Fail)
    }
}

/// One (entity, invariant) check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which rule was checked.
    pub invariant: Invariant,
    /// File or directory path relative to the docs root (`.` for the root).
    pub subject: PathBuf,
    /// Pass or fail with diagnostic.
    pub outcome: Outcome,
}

impl CheckResult {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Pass)
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&CheckFailure> {
        match &self.outcome {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Pass => write!(
                f,
                "PASS [{}] {} {}",
                self.invariant,
                self.subject.display(),
                self.invariant.describe()
            ),
            Outcome::Fail(failure) => write!(
                f,
                "FAIL [{}] {}: {failure}",
                self.invariant,
                self.subject.display()
            ),
        }
    }
}

/// All checks from one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The docs root that was validated.
    pub root: PathBuf,
    /// Every check, grouped by invariant in [`Invariant::ALL`] order.
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    /// Total number of checks.
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    /// Number of passing checks.
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    /// Number of failing checks.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// True when no check failed.
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(CheckResult::passed)
    }

    /// Failing checks only.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed())
    }

    /// Checks for one file or directory, relative to the root.
    pub fn for_subject<'a>(
        &'a self,
        subject: &'a Path,
    ) -> impl Iterator<Item = &'a CheckResult> + 'a {
        self.checks.iter().filter(move |c| c.subject == subject)
    }

    /// Checks for one invariant.
    pub fn by_invariant(&self, invariant: Invariant) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(move |c| c.invariant == invariant)
    }

    /// The missing frontmatter keys reported for `subject`, if that check failed
    /// for that reason.
    pub fn missing_fields(&self, subject: &Path) -> Option<&[String]> {
        self.checks
            .iter()
            .filter(|c| c.invariant == Invariant::Frontmatter && c.subject == subject)
            .find_map(|c| match c.failure() {
                Some(CheckFailure::MissingFields { missing }) => Some(missing.as_slice()),
                _ => None,
            })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} checks passed", self.passed(), self.total())
    }
}

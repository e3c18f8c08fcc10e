//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout dslint. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - [`DslintError`] covers conditions that stop a whole run: an unusable
//!   configuration or a docs root that cannot be read.
//! - [`ParseError`] describes a malformed frontmatter block. It is always
//!   scoped to one content file and never aborts a run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for dslint.
#[derive(Error, Debug)]
pub enum DslintError {
    /// The configuration file could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// The docs root does not exist or is not a directory.
    #[error("docs root not found: {}", .path.display())]
    RootNotFound {
        /// The path that was expected to be the docs root.
        path: PathBuf,
    },

    /// A content file was malformed.
    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        /// The offending content file.
        path: PathBuf,
        /// What was wrong with it.
        #[source]
        source: ParseError,
    },

    /// Filesystem error with the path it occurred on.
    #[error("io error on {}: {source}", .path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl DslintError {
    /// Wrap an `io::Error` with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error splitting or decoding a frontmatter block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The opening `---` line has no matching closing line.
    #[error("frontmatter block is not terminated by a closing delimiter")]
    Unterminated,

    /// The block is not valid YAML.
    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    /// The block is valid YAML but not a key/value mapping.
    #[error("frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A mapping key or value has no JSON equivalent.
    #[error("unsupported frontmatter value: {0}")]
    Unsupported(String),
}

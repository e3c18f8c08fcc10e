//! # dslint-core — Foundational Types for dslint
//!
//! Defines the pieces every other dslint crate builds on: the error
//! hierarchy, the validator configuration, content-file parsing, and
//! Markdown heading analysis. It depends on nothing internal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dslint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - Read-only: nothing in this crate writes to the filesystem.

pub mod config;
pub mod content;
pub mod error;
pub mod markdown;

// Re-export primary types for ergonomic imports.
pub use config::{ValidatorConfig, CONFIG_FILE_NAME};
pub use content::{parse_content_file, split_frontmatter, ContentFile, Frontmatter};
pub use error::{DslintError, ParseError};
pub use markdown::{count_top_level_headings, strip_code_blocks};

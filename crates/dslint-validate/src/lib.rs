//! # dslint-validate — Documentation Structure Validation
//!
//! Walks a documentation content tree and checks three structural
//! invariants, reporting each (entity, invariant) pair as an independent
//! pass/fail result:
//!
//! - **frontmatter**: every content file declares `title`, `description`
//!   and `sidebar_position` (configurable);
//! - **headings**: every content file has exactly one top-level heading
//!   outside fenced code blocks;
//! - **category**: every directory that transitively contains a content
//!   file owns a `_category_.json` descriptor.
//!
//! The entry point is [`StructureValidator::run`]. The individual steps
//! ([`walk`], [`check`]) are public so that callers can assert on single
//! entities.
//!
//! ## Crate Policy
//!
//! - Depends only on `dslint-core` internally.
//! - Failures are local: one unreadable or malformed file never suppresses
//!   checks on another.

pub mod check;
pub mod report;
pub mod validator;
pub mod walk;

pub use check::{check_category, check_frontmatter, check_headings, validate_frontmatter};
pub use report::{CheckFailure, CheckResult, Invariant, Outcome, ValidationReport};
pub use validator::StructureValidator;
pub use walk::{
    enumerate_content_bearing_directories, enumerate_content_files, has_category_descriptor,
    Enumeration,
};

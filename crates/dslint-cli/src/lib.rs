//! # dslint-cli — CLI Tool for dslint
//!
//! Provides the `dslint` command-line interface.
//!
//! ## Subcommands
//!
//! - `dslint check` — Validate a docs tree and print one result per check.
//! - `dslint config` — Print the effective configuration.
//!
//! ```bash
//! dslint check
//! dslint check website/docs --check headings --format json
//! dslint --config ci/dslint.yaml check
//! ```
//!
//! Exit status is 0 when every check passes, 1 when any check fails and 2
//! when the run could not be performed at all.

pub mod check;
pub mod config;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to the project root.
///
/// If the path is absolute, returns it as-is. If relative and it exists
/// relative to `project_root`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, project_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let project_relative = project_root.join(path);
    if project_relative.exists() {
        project_relative
    } else {
        path.to_path_buf()
    }
}

/// Walk up from `start` to find the project root.
///
/// The project root is the nearest directory holding a `dslint.yaml` or a
/// `docs/` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(dslint_core::CONFIG_FILE_NAME).is_file() || dir.join("docs").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

//! # Docs Tree Enumeration
//!
//! Depth-first walks over the content tree. Directory entries are visited in
//! file-name order so that reports are stable across runs and platforms.
//! Symlinked directories are not followed. A symlink counts as a content file
//! only when its target is a regular file.
//!
//! A directory that cannot be listed below the root does not abort the walk:
//! it is recorded in [`Enumeration::unreadable`] and skipped. Only an
//! unreadable root is an error.

use std::collections::BTreeMap;
use std::fs::FileType;
use std::path::{Path, PathBuf};

use dslint_core::{DslintError, ValidatorConfig};

/// Paths found by a walk plus the directories it could not list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Matching paths in walk order.
    pub paths: Vec<PathBuf>,
    /// Directories below the root that could not be listed, with the reason.
    pub unreadable: BTreeMap<PathBuf, String>,
}

/// Every content file under `root`, recursively.
///
/// # Errors
///
/// Returns [`DslintError::Io`] if `root` itself cannot be listed.
pub fn enumerate_content_files(
    root: &Path,
    config: &ValidatorConfig,
) -> Result<Enumeration, DslintError> {
    let mut walker = Walker::new(config);
    let entries = read_sorted_entries(root).map_err(|e| DslintError::io(root, e))?;
    walker.collect_files(entries);
    Ok(walker.finish())
}

/// Every directory under `root` that directly or transitively contains a
/// content file. Parents precede their children.
///
/// The root itself is included first when `config.include_root` is set and
/// the tree holds any content.
///
/// # Errors
///
/// Returns [`DslintError::Io`] if `root` itself cannot be listed.
pub fn enumerate_content_bearing_directories(
    root: &Path,
    config: &ValidatorConfig,
) -> Result<Enumeration, DslintError> {
    let mut walker = Walker::new(config);
    let entries = read_sorted_entries(root).map_err(|e| DslintError::io(root, e))?;

    if config.include_root {
        walker.collect_content_dir(root, &entries);
    } else {
        walker.collect_content_dirs(&entries);
    }
    Ok(walker.finish())
}

/// Whether `dir` directly holds a file named `category_file`.
pub fn has_category_descriptor(dir: &Path, category_file: &str) -> bool {
    dir.join(category_file).is_file()
}

struct Entry {
    path: PathBuf,
    file_type: FileType,
}

impl Entry {
    fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }

    /// Regular files, plus symlinks whose target is a regular file.
    fn is_file(&self) -> bool {
        self.file_type.is_file() || (self.file_type.is_symlink() && self.path.is_file())
    }

    fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

struct Walker<'a> {
    config: &'a ValidatorConfig,
    found: Vec<PathBuf>,
    unreadable: BTreeMap<PathBuf, String>,
}

impl<'a> Walker<'a> {
    fn new(config: &'a ValidatorConfig) -> Self {
        Self {
            config,
            found: Vec::new(),
            unreadable: BTreeMap::new(),
        }
    }

    fn finish(self) -> Enumeration {
        Enumeration {
            paths: self.found,
            unreadable: self.unreadable,
        }
    }

    fn is_content(&self, entry: &Entry) -> bool {
        entry.is_file()
            && entry
                .file_name()
                .is_some_and(|name| self.config.is_content_file_name(name))
    }

    fn read_dir(&mut self, dir: &Path) -> Option<Vec<Entry>> {
        match read_sorted_entries(dir) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %e,
                    "failed to read directory during docs walk"
                );
                self.unreadable.insert(dir.to_path_buf(), e.to_string());
                None
            }
        }
    }

    fn collect_files(&mut self, entries: Vec<Entry>) {
        for entry in entries {
            if entry.is_dir() {
                if let Some(children) = self.read_dir(&entry.path) {
                    self.collect_files(children);
                }
            } else if self.is_content(&entry) {
                self.found.push(entry.path);
            }
        }
    }

    /// Push content-bearing subdirectories of `entries`, parents first.
    /// Returns whether anything below `entries` holds content. Each directory
    /// is listed exactly once.
    fn collect_content_dirs(&mut self, entries: &[Entry]) -> bool {
        let mut has_content = entries.iter().any(|e| self.is_content(e));
        for entry in entries.iter().filter(|e| e.is_dir()) {
            if let Some(children) = self.read_dir(&entry.path) {
                has_content |= self.collect_content_dir(&entry.path, &children);
            }
        }
        has_content
    }

    /// Push `dir` ahead of its descendants, then drop it again if nothing
    /// below it turned out to hold content.
    fn collect_content_dir(&mut self, dir: &Path, children: &[Entry]) -> bool {
        let mark = self.found.len();
        self.found.push(dir.to_path_buf());
        let has_content = self.collect_content_dirs(children);
        if !has_content {
            self.found.truncate(mark);
        }
        has_content
    }
}

fn read_sorted_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "failed to stat entry");
                continue;
            }
        };
        entries.push(Entry {
            path: entry.path(),
            file_type,
        });
    }
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}

//! # Validator Configuration
//!
//! Settings for a validation run, loadable from a `dslint.yaml` file.
//! Every field has a default matching the Docusaurus content layout, so an
//! empty file (or no file at all) yields a working configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DslintError;

/// Conventional name of the configuration file at a project root.
pub const CONFIG_FILE_NAME: &str = "dslint.yaml";

/// Frontmatter keys every content file must declare.
pub const DEFAULT_REQUIRED_FRONTMATTER: [&str; 3] = ["title", "description", "sidebar_position"];

/// File extensions (without the dot) recognized as content files.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Sidebar category descriptor expected in every content-bearing directory.
pub const DEFAULT_CATEGORY_FILE: &str = "_category_.json";

/// Configuration for a structure validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Root of the documentation content tree.
    pub docs_dir: PathBuf,
    /// Keys that must be present in every frontmatter block, in report order.
    pub required_frontmatter: Vec<String>,
    /// Recognized content extensions. Matching is a case-sensitive suffix test.
    pub extensions: Vec<String>,
    /// File name of the category descriptor.
    pub category_file: String,
    /// Whether the docs root itself must own a category descriptor.
    pub include_root: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            required_frontmatter: DEFAULT_REQUIRED_FRONTMATTER
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            category_file: DEFAULT_CATEGORY_FILE.to_string(),
            include_root: false,
        }
    }
}

impl ValidatorConfig {
    /// Default configuration rooted at `docs_dir`.
    pub fn for_docs_dir(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a YAML file.
    ///
    /// A relative `docs_dir` is resolved against the directory containing
    /// the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DslintError::Io`] if the file cannot be read and
    /// [`DslintError::Config`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, DslintError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DslintError::io(path, e))?;
        let mut config = Self::from_yaml_str(&content).map_err(|e| match e {
            DslintError::Config(msg) => DslintError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        if config.docs_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.docs_dir = parent.join(&config.docs_dir);
            }
        }

        tracing::debug!(
            config = %path.display(),
            docs_dir = %config.docs_dir.display(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse and check a configuration from YAML text.
    ///
    /// Empty input yields the default configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DslintError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| DslintError::Config(e.to_string()))?
        };
        config.check()?;
        Ok(config)
    }

    /// Reject configurations that would make every run vacuous.
    pub fn check(&self) -> Result<(), DslintError> {
        if self.extensions.is_empty() {
            return Err(DslintError::Config(
                "at least one content extension is required".to_string(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(DslintError::Config(format!(
                "extension {bad:?} must be non-empty and given without a leading dot"
            )));
        }
        if self.category_file.is_empty()
            || self.category_file.contains('/')
            || self.category_file.contains('\\')
        {
            return Err(DslintError::Config(format!(
                "category_file {:?} must be a plain file name",
                self.category_file
            )));
        }
        Ok(())
    }

    /// Whether `file_name` names a content file under this configuration.
    pub fn is_content_file_name(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

//! # Configuration Resolution
//!
//! Picks the configuration for a run: an explicit `--config` file, else
//! `dslint.yaml` at the project root, else the built-in defaults rooted at
//! the project's `docs/` directory.

use std::path::Path;

use anyhow::{Context, Result};

use dslint_core::{ValidatorConfig, CONFIG_FILE_NAME};

/// Load the effective configuration.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<ValidatorConfig> {
    if let Some(path) = explicit {
        let path = crate::resolve_path(path, project_root);
        return ValidatorConfig::load(&path)
            .with_context(|| format!("failed to load configuration {}", path.display()));
    }

    let discovered = project_root.join(CONFIG_FILE_NAME);
    if discovered.is_file() {
        return ValidatorConfig::load(&discovered)
            .with_context(|| format!("failed to load configuration {}", discovered.display()));
    }

    tracing::debug!(
        project_root = %project_root.display(),
        "no configuration file found; using defaults"
    );
    let defaults = ValidatorConfig::default();
    Ok(ValidatorConfig {
        docs_dir: project_root.join(&defaults.docs_dir),
        ..defaults
    })
}

/// Execute the `dslint config` subcommand: print the effective configuration
/// as YAML.
pub fn run_config(config: &ValidatorConfig) -> Result<u8> {
    let yaml = serde_yaml::to_string(config).context("failed to serialize configuration")?;
    print!("{yaml}");
    Ok(0)
}

//! Configuration file support for sbom-inspect.
//!
//! Provides YAML-based configuration through `sbom-inspect.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::ReportFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-inspect.config.yml";

/// Policy file used when neither the CLI nor the config file names one
pub const DEFAULT_POLICY_FILE: &str = "license.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// License policy file. Relative paths are resolved against the
    /// directory holding the config file.
    pub policy_file: Option<PathBuf>,
    pub format: Option<String>,
    pub summary: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured report format, if any
    pub fn report_format(&self) -> Result<Option<ReportFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                ReportFormat::from_str(format).map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: {}\n\n💡 Hint: Set `format` to txt, csv or json.",
                        e
                    )
                })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    config.report_format()?;
    warn_unknown_fields(&config);

    if let (Some(policy_file), Some(dir)) = (config.policy_file.as_ref(), path.parent()) {
        if policy_file.is_relative() {
            config.policy_file = Some(dir.join(policy_file));
        }
    }
    log::debug!("Loaded config file: {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Picks the policy file: CLI flag, then config file, then `license.json`
pub fn resolve_policy_file(cli: Option<&Path>, config: Option<&ConfigFile>) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.policy_file.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_FILE))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

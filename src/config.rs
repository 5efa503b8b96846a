//! Configuration file support for nuget-graph.
//!
//! Provides YAML-based configuration through `nuget-graph.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::dependency_graph::domain::{PLACEHOLDER_VERSION, ROOT_PACKAGE_ID};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nuget-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub target_framework: Option<String>,
    pub unresolved_label: Option<String>,
    pub root_id: Option<String>,
    /// Package keys whose dependency chains are always traced.
    pub why: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub target_framework: Option<String>,
    pub unresolved_label: Option<String>,
    pub why: Vec<String>,
}

/// Effective options after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub format: OutputFormat,
    pub target_framework: Option<String>,
    pub unresolved_label: String,
    pub root_id: String,
    pub why: Vec<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merges CLI values over config values over built-in defaults.
///
/// `why` keys from both sources are combined (config first), duplicates
/// dropped.
pub fn merge_config(cli: CliOverrides, config: Option<ConfigFile>) -> Result<MergedConfig> {
    let config = config.unwrap_or_default();

    let format = match (cli.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => parse_format(value)?,
        (None, None) => OutputFormat::default(),
    };

    let mut why: Vec<String> = Vec::new();
    for key in config.why.unwrap_or_default().into_iter().chain(cli.why) {
        if !why.iter().any(|existing| existing.eq_ignore_ascii_case(&key)) {
            why.push(key);
        }
    }

    Ok(MergedConfig {
        format,
        target_framework: cli.target_framework.or(config.target_framework),
        unresolved_label: cli
            .unresolved_label
            .or(config.unresolved_label)
            .unwrap_or_else(|| PLACEHOLDER_VERSION.to_string()),
        root_id: config
            .root_id
            .unwrap_or_else(|| ROOT_PACKAGE_ID.to_string()),
        why,
    })
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value).map_err(|e| {
        anyhow::anyhow!(
            "Invalid config: {}\n\n💡 Hint: Set 'format' to 'json' or 'markdown'.",
            e
        )
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        parse_format(format)?;
    }

    if let Some(root_id) = config.root_id.as_deref() {
        if root_id.trim().is_empty() {
            bail!(
                "Invalid config: root_id must not be empty.\n\n\
                 💡 Hint: Remove 'root_id' to use the default '{}'.",
                ROOT_PACKAGE_ID
            );
        }
    }

    if let Some(ref why) = config.why {
        for (i, key) in why.iter().enumerate() {
            if key.trim().is_empty() {
                bail!(
                    "Invalid config: why[{}] must not be empty.\n\n\
                     💡 Hint: Each 'why' entry is a package key such as \"Newtonsoft.Json/13.0.1\" or \"Newtonsoft.Json\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

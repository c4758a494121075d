use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PowerError;
use crate::model::precision::Precision;

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    pub arithmetic: ArithmeticConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArithmeticConfig {
    pub precision: Precision,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub enabled: bool,
    pub filter: String,
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl ModuleConfig {
    /// Load configuration with layering: defaults → `user_path` (if given).
    pub fn load_from(user_path: Option<&Path>) -> Result<Self, PowerError> {
        let mut table = parse_table(DEFAULTS, "defaults")?;

        if let Some(path) = user_path {
            let raw = fs::read_to_string(path).map_err(|source| PowerError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
            let origin = path.display().to_string();
            merge_tables(&mut table, parse_table(&raw, &origin)?);
            tracing::debug!("merged user config {origin}");
            return into_config(table, &origin);
        }

        into_config(table, "defaults")
    }

    /// Merge a TOML document over the built-in defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, PowerError> {
        let mut table = parse_table(DEFAULTS, "defaults")?;
        merge_tables(&mut table, parse_table(raw, "inline")?);
        into_config(table, "inline")
    }

    pub fn precision(&self) -> Precision {
        self.arithmetic.precision
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            arithmetic: ArithmeticConfig {
                precision: Precision::Single,
            },
            log: LogConfig {
                enabled: false,
                filter: "power=info".to_string(),
                directory: None,
            },
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "power")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn parse_table(raw: &str, origin: &str) -> Result<toml::Table, PowerError> {
    raw.parse::<toml::Table>()
        .map_err(|source| PowerError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
}

fn into_config(table: toml::Table, origin: &str) -> Result<ModuleConfig, PowerError> {
    toml::Value::Table(table)
        .try_into::<ModuleConfig>()
        .map_err(|source| PowerError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
}

/// Overlay `overlay` onto `base`; nested tables merge key by key, anything else replaces.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, nested);
                    continue;
                }
                base.insert(key, toml::Value::Table(nested));
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

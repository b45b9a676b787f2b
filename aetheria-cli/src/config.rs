//! CLI configuration loading.
//!
//! A single TOML file in the XDG config directory; a missing file or missing
//! keys fall back to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use aetheria_core::theme::Theme;
use aetheria_core::{DEFAULT_ORACLE_MODEL, DEFAULT_ORACLE_URL};

/// Configuration as stored in TOML (optional fields so partial files work)
#[derive(Debug, Clone, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    oracle: RawOracleConfig,

    #[serde(default)]
    store: RawStoreConfig,

    theme: Option<Theme>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RawOracleConfig {
    /// Base URL of the Ollama server
    base_url: Option<String>,

    /// Model used for evaluation and content generation
    model: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RawStoreConfig {
    /// Override for the data directory
    data_dir: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AetheriaConfig {
    // Plain value first so TOML serialization emits it before the tables.
    pub theme: Theme,
    pub oracle: OracleConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl Default for AetheriaConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            oracle: OracleConfig {
                base_url: DEFAULT_ORACLE_URL.to_string(),
                model: DEFAULT_ORACLE_MODEL.to_string(),
            },
            store: StoreConfig {
                data_dir: aetheria_paths::data_dir(),
            },
        }
    }
}

impl AetheriaConfig {
    /// Path of the user config file.
    pub fn path() -> PathBuf {
        aetheria_paths::config_dir().join("config.toml")
    }

    /// Load the user config, applying defaults for anything unset.
    pub fn load() -> Result<Self> {
        let path = Self::path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let raw: RawConfig = toml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::finalize(raw))
    }

    fn finalize(raw: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            theme: raw.theme.unwrap_or(defaults.theme),
            oracle: OracleConfig {
                base_url: raw.oracle.base_url.unwrap_or(defaults.oracle.base_url),
                model: raw.oracle.model.unwrap_or(defaults.oracle.model),
            },
            store: StoreConfig {
                data_dir: raw.store.data_dir.unwrap_or(defaults.store.data_dir),
            },
        }
    }
}

//! Configuration schema for swapcache
//!
//! Configuration is stored at `~/.config/swapcache/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Store and live directory locations
    pub paths: PathsConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Filesystem locations the core operates on
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Provisioned layer, searched first, never written
    pub preinstalled_dir: PathBuf,

    /// User-writable layer, target of `create`
    pub own_dir: PathBuf,

    /// One subdirectory per preset
    pub presets_dir: PathBuf,

    /// `<hash> - <description>` list used to pick hashes by name
    pub functions_file: PathBuf,

    /// Runtime cache directory whose slots are overwritten and cleared
    pub live_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data = super::ConfigManager::data_dir();
        Self {
            preinstalled_dir: data.join("caches").join("preinstalled"),
            own_dir: data.join("caches").join("own"),
            presets_dir: data.join("presets"),
            functions_file: data.join("functions.json"),
            live_dir: super::ConfigManager::default_live_dir(),
        }
    }
}

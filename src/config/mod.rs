//! Configuration management for swapcache

pub mod schema;

pub use schema::{Config, PathsConfig};

use crate::error::{SwapError, SwapResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swapcache")
            .join("config.toml")
    }

    /// Root of the local store (layers, presets, function registry)
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swapcache")
    }

    /// Default runtime cache directory
    pub fn default_live_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Temp")
            .join("Roblox")
            .join("http")
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub async fn load(&self) -> SwapResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> SwapResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SwapError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| SwapError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> SwapResult<()> {
        if let Some(parent) = self.config_path.parent() {
            create_dir(parent).await?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            SwapError::io(format!("writing config to {}", self.config_path.display()), e)
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Create the writable store directories.
    ///
    /// The preinstalled layer is provisioned externally and the live
    /// directory belongs to the runtime, so neither is touched here.
    pub async fn ensure_store_dirs(paths: &PathsConfig) -> SwapResult<()> {
        for dir in [&paths.own_dir, &paths.presets_dir] {
            create_dir(dir).await?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn create_dir(dir: &Path) -> SwapResult<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| SwapError::ConfigDirCreate {
            path: dir.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("nonexistent.toml"));

        let config = manager.load().await.unwrap();
        assert_eq!(config.general.log_format, "text");
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("nested").join("config.toml"));

        let mut config = Config::default();
        config.paths.live_dir = temp.path().join("live");

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.paths.live_dir, temp.path().join("live"));
    }

    #[tokio::test]
    async fn invalid_config_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[paths\nbroken").unwrap();

        let err = ConfigManager::with_path(path.clone()).load().await.unwrap_err();
        assert!(matches!(err, SwapError::ConfigInvalid { path: p, .. } if p == path));
    }

    #[tokio::test]
    async fn ensure_store_dirs_skips_live_and_preinstalled() {
        let temp = TempDir::new().unwrap();
        let paths = PathsConfig {
            preinstalled_dir: temp.path().join("pre"),
            own_dir: temp.path().join("own"),
            presets_dir: temp.path().join("presets"),
            functions_file: temp.path().join("functions.json"),
            live_dir: temp.path().join("live"),
        };

        ConfigManager::ensure_store_dirs(&paths).await.unwrap();

        assert!(paths.own_dir.is_dir());
        assert!(paths.presets_dir.is_dir());
        assert!(!paths.live_dir.exists());
        assert!(!paths.preinstalled_dir.exists());
    }
}

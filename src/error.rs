//! Error types for swapcache
//!
//! All modules use `SwapResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for swapcache operations
pub type SwapResult<T> = Result<T, SwapError>;

/// All errors that can occur in swapcache
#[derive(Error, Debug)]
pub enum SwapError {
    // Registry errors (never fatal, the registry degrades to empty)
    #[error("Could not load function registry {source_name}: {reason}")]
    RegistryLoad { source_name: String, reason: String },

    // Lookup errors
    #[error("Cache entry not found: {0}")]
    EntryNotFound(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    // Input errors
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Cache entry already exists: {}", .0.display())]
    EntryExists(PathBuf),

    // Filesystem mutation errors
    #[error("Failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create directory {}: {source}", .path.display())]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl SwapError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a copy error
    pub fn copy(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// Create a delete error
    pub fn delete(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Delete {
            path: path.into(),
            source,
        }
    }

    /// True when the error means a label or preset did not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound(_) | Self::PresetNotFound(_))
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EntryNotFound(_) => Some("Run: swapcache list"),
            Self::PresetNotFound(_) => Some("Run: swapcache list --presets"),
            Self::EntryExists(_) => Some("Re-run with --force to overwrite"),
            Self::Copy { .. } => Some("Check that the live directory exists and is writable"),
            Self::ConfigInvalid { .. } => Some("Run: swapcache init --force"),
            _ => None,
        }
    }
}

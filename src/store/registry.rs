//! Function registry
//!
//! An advisory list of `"<hash> - <description>"` strings that lets users
//! pick a hash by what it is for. The file is a JSON array of strings
//! (UTF-8, BOM tolerated); when it is not valid JSON it is read as one
//! entry per line instead. Loading never fails: any problem degrades to an
//! empty registry.

use crate::error::{SwapError, SwapResult};
use crate::store::naming::SEPARATOR;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

const BOM: char = '\u{feff}';

/// Example content written by `init` when no registry file exists
const TEMPLATE: &[&str] = &[
    "00000000000000000000000000000000 - Example Function 1",
    "11111111111111111111111111111111 - Example Function 2",
];

/// A known hash and what it is for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub hash: String,
    pub description: String,
}

impl FunctionDescriptor {
    /// Parse one `"<hash> - <description>"` line; lines without the
    /// separator or with an empty half are dropped.
    fn parse(line: &str) -> Option<Self> {
        let (hash, description) = line.split_once(SEPARATOR)?;
        let (hash, description) = (hash.trim(), description.trim());
        if hash.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self {
            hash: hash.to_string(),
            description: description.to_string(),
        })
    }
}

/// Loaded registry, read-only after load
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: Vec<FunctionDescriptor>,
}

impl Registry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse raw registry bytes.
    ///
    /// Tries a JSON array of strings first, then one entry per line.
    /// Invalid UTF-8 and a JSON root that is not an array are errors.
    pub fn from_bytes(source_name: &str, raw: &[u8]) -> SwapResult<Self> {
        let load_error = |reason: String| SwapError::RegistryLoad {
            source_name: source_name.to_string(),
            reason,
        };

        let text = std::str::from_utf8(raw)
            .map_err(|e| load_error(format!("invalid UTF-8: {}", e)))?;
        let text = text.strip_prefix(BOM).unwrap_or(text);

        let lines: Vec<String> = match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Ok(_) => return Err(load_error("JSON root is not a list".to_string())),
            Err(e) => {
                debug!("{} is not JSON ({}), reading it line by line", source_name, e);
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            }
        };

        Ok(Self {
            functions: lines
                .iter()
                .filter_map(|line| FunctionDescriptor::parse(line))
                .collect(),
        })
    }

    /// Parse raw bytes, degrading to an empty registry on error
    pub fn parse(source_name: &str, raw: &[u8]) -> Self {
        Self::from_bytes(source_name, raw).unwrap_or_else(|e| {
            warn!("{}", e);
            Self::empty()
        })
    }

    /// Read and parse a registry file
    pub fn try_load(path: &Path) -> SwapResult<Self> {
        let source_name = path.display().to_string();
        let raw = std::fs::read(path).map_err(|e| SwapError::RegistryLoad {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&source_name, &raw)
    }

    /// Read a registry file; a missing or broken file gives an empty registry
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(registry) => {
                debug!(
                    "Loaded {} functions from {}",
                    registry.len(),
                    path.display()
                );
                registry
            }
            Err(e) => {
                warn!("{}", e);
                Self::empty()
            }
        }
    }

    /// Write the example registry if `path` does not exist yet.
    ///
    /// Returns whether a file was written.
    pub fn write_template(path: &Path) -> SwapResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SwapError::io(format!("creating {}", parent.display()), e))?;
        }
        let content = serde_json::to_string_pretty(TEMPLATE)?;
        std::fs::write(path, content)
            .map_err(|e| SwapError::io(format!("writing {}", path.display()), e))?;
        Ok(true)
    }

    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    /// Hash of the first function with this description
    pub fn hash_for(&self, description: &str) -> Option<&str> {
        let description = description.trim();
        self.functions
            .iter()
            .find(|f| f.description == description)
            .map(|f| f.hash.as_str())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

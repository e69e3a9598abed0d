//! Layered cache store and label resolution
//!
//! Two directories hold entries named `<hash> - <display name>`:
//! 1. Preinstalled: provisioned externally, searched first, never written
//! 2. Own: user-writable, target of entry creation
//!
//! Resolution is first match wins: the first file whose name ends with
//! `" - " + label`. Within a layer, files are visited in lexical file-name
//! order, which for a shared display name means lexical order by hash.

use crate::error::{SwapError, SwapResult};
use crate::store::naming::{split_entry_name, SEPARATOR};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A layer of the local store, in search priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Provisioned entries, read-only to swapcache
    Preinstalled,
    /// Entries created by the user
    Own,
}

impl Layer {
    /// All layers in search priority order
    pub fn all() -> &'static [Self] {
        &[Self::Preinstalled, Self::Own]
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preinstalled => write!(f, "preinstalled"),
            Self::Own => write!(f, "own"),
        }
    }
}

/// Where a discovered entry file lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Origin {
    /// One of the two store layers
    Layer(Layer),
    /// Member of the named preset
    Preset(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer(layer) => write!(f, "{}", layer),
            Self::Preset(name) => write!(f, "preset:{}", name),
        }
    }
}

/// A cache entry file discovered on disk.
///
/// Never cached between operations; the filesystem is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    pub hash: String,
    pub display_name: String,
    pub origin: Origin,
    pub path: PathBuf,
}

impl CacheEntry {
    /// The entry's file name as stored on disk
    pub fn file_name(&self) -> String {
        crate::store::naming::entry_file_name(&self.hash, &self.display_name)
    }
}

/// Regular files of `dir` sorted by name, as `(file_name, path)`.
///
/// A missing directory is treated as empty. Non-UTF-8 names are skipped.
pub(crate) fn scan_files(dir: &Path) -> SwapResult<Vec<(String, PathBuf)>> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, treating as empty", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(SwapError::io(format!("reading {}", dir.display()), e)),
    };

    let mut files = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| SwapError::io(format!("reading {}", dir.display()), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => files.push((name, path)),
            Err(raw) => debug!("Skipping non-UTF-8 file name {:?}", raw),
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Entries in `dir` that follow the naming convention, in scan order
fn scan_entries(dir: &Path, origin: &Origin) -> SwapResult<Vec<CacheEntry>> {
    Ok(scan_files(dir)?
        .into_iter()
        .filter_map(|(name, path)| {
            let (hash, display_name) = split_entry_name(&name)?;
            Some(CacheEntry {
                hash: hash.to_string(),
                display_name: display_name.to_string(),
                origin: origin.clone(),
                path,
            })
        })
        .collect())
}

/// The preinstalled and own layers
#[derive(Debug, Clone)]
pub struct LayeredStore {
    preinstalled: PathBuf,
    own: PathBuf,
}

impl LayeredStore {
    pub fn new(preinstalled: impl Into<PathBuf>, own: impl Into<PathBuf>) -> Self {
        Self {
            preinstalled: preinstalled.into(),
            own: own.into(),
        }
    }

    /// Directory backing a layer
    pub fn layer_dir(&self, layer: Layer) -> &Path {
        match layer {
            Layer::Preinstalled => &self.preinstalled,
            Layer::Own => &self.own,
        }
    }

    /// Entries of a single layer
    pub fn layer_entries(&self, layer: Layer) -> SwapResult<Vec<CacheEntry>> {
        scan_entries(self.layer_dir(layer), &Origin::Layer(layer))
    }

    /// All entries, preinstalled layer first
    pub fn entries(&self) -> SwapResult<Vec<CacheEntry>> {
        let mut entries = Vec::new();
        for &layer in Layer::all() {
            entries.extend(self.layer_entries(layer)?);
        }
        Ok(entries)
    }

    /// Display names of all entries, duplicates included, in search order
    pub fn list_display_names(&self) -> SwapResult<Vec<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|entry| entry.display_name)
            .collect())
    }

    /// Resolve a display name to the entry that wins the search.
    ///
    /// A file matches when its name ends with `" - " + display_name`, so
    /// `AAA - Night - Foo` answers for `Foo` as well as `Night - Foo`.
    /// Display names are not unique. The preinstalled layer beats the own
    /// layer and, within a layer, the lexically first file name wins. The
    /// others are never resolved.
    pub fn resolve(&self, display_name: &str) -> SwapResult<CacheEntry> {
        if display_name.is_empty() {
            return Err(SwapError::EntryNotFound(display_name.to_string()));
        }
        let suffix = format!("{SEPARATOR}{display_name}");
        for &layer in Layer::all() {
            if let Some(entry) = self
                .layer_entries(layer)?
                .into_iter()
                .find(|entry| entry.file_name().ends_with(&suffix))
            {
                debug!(
                    "Resolved '{}' to {} in {} layer",
                    display_name,
                    entry.hash,
                    layer
                );
                return Ok(entry);
            }
        }

        Err(SwapError::EntryNotFound(display_name.to_string()))
    }
}

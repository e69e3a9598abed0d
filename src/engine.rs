//! Stateless operation surface used by the CLI
//!
//! Each call is a pure function of the configured directories, the
//! registry loaded at construction, and its arguments. Calls block on the
//! filesystem and must not overlap; callers that need to stay responsive
//! run them on a worker thread.

use crate::config::PathsConfig;
use crate::error::{SwapError, SwapResult};
use crate::live::{BatchReport, ClearReport, LiveCache};
use crate::store::{CacheEntry, LayeredStore, NewEntry, PresetStore, Registry};
use std::path::PathBuf;
use tracing::debug;

/// What a label refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A single entry in the layered store, by display name
    Caches,
    /// A preset directory, by name
    Presets,
}

/// How the hash of a new entry is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashRef {
    /// Free-text hash
    Hash(String),
    /// Description of a registry function
    Description(String),
}

/// Request to create an entry in the own layer
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub source_file: PathBuf,
    pub hash: HashRef,
    pub display_name: String,
    pub overwrite: bool,
}

/// Outcome of a successful apply
#[derive(Debug, Clone)]
pub enum ApplyOutcome {
    /// One entry copied into its slot
    Single { entry: CacheEntry, slot: PathBuf },
    /// A preset applied best-effort
    Batch(BatchReport),
}

/// Outcome of a create request that did not fail
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    Created(CacheEntry),
    /// Target exists; repeat with `overwrite` after the user confirms
    NeedsOverwriteConfirmation(PathBuf),
}

/// The core: layered store, presets, live directory and registry
#[derive(Debug, Clone)]
pub struct Engine {
    store: LayeredStore,
    presets: PresetStore,
    live: LiveCache,
    registry: Registry,
}

impl Engine {
    pub fn new(paths: &PathsConfig, registry: Registry) -> Self {
        Self {
            store: LayeredStore::new(&paths.preinstalled_dir, &paths.own_dir),
            presets: PresetStore::new(&paths.presets_dir),
            live: LiveCache::new(&paths.live_dir),
            registry,
        }
    }

    /// Build from configuration, loading the registry file once
    pub fn from_paths(paths: &PathsConfig) -> Self {
        Self::new(paths, Registry::load(&paths.functions_file))
    }

    pub fn store(&self) -> &LayeredStore {
        &self.store
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    pub fn live(&self) -> &LiveCache {
        &self.live
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Labels selectable for `source`
    pub fn list_entries(&self, source: Source) -> SwapResult<Vec<String>> {
        match source {
            Source::Caches => self.store.list_display_names(),
            Source::Presets => self.presets.list(),
        }
    }

    /// Apply the entry or preset a label names
    pub fn apply(&self, source: Source, label: &str) -> SwapResult<ApplyOutcome> {
        match source {
            Source::Caches => {
                let entry = self.store.resolve(label)?;
                let slot = self.live.apply(&entry)?;
                Ok(ApplyOutcome::Single { entry, slot })
            }
            Source::Presets => Ok(ApplyOutcome::Batch(
                self.live.apply_preset(&self.presets, label)?,
            )),
        }
    }

    /// Create an entry in the own layer
    pub fn create_entry(&self, request: &CreateRequest) -> SwapResult<CreateOutcome> {
        let hash = match &request.hash {
            HashRef::Hash(hash) => hash.clone(),
            HashRef::Description(description) => self
                .registry
                .hash_for(description)
                .map(str::to_string)
                .ok_or_else(|| {
                    SwapError::Validation(format!("unknown function '{}'", description))
                })?,
        };
        debug!("Creating '{}' with hash {}", request.display_name, hash);

        let new = NewEntry {
            source_file: request.source_file.clone(),
            hash,
            display_name: request.display_name.clone(),
        };
        match self.store.create_entry(&new, request.overwrite) {
            Ok(entry) => Ok(CreateOutcome::Created(entry)),
            Err(SwapError::EntryExists(path)) => Ok(CreateOutcome::NeedsOverwriteConfirmation(path)),
            Err(e) => Err(e),
        }
    }

    /// Remove everything in the live directory
    pub fn clear_live(&self) -> SwapResult<ClearReport> {
        self.live.clear()
    }
}

//! Live runtime cache directory
//!
//! Slots are files named by hash alone. swapcache only ever overwrites a
//! slot with an entry's bytes or deletes slots in bulk; it never reads them.

use crate::error::{SwapError, SwapResult};
use crate::store::{copy_preserving, CacheEntry, PresetMember, PresetStore};
use serde::Serialize;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A preset member that could not be applied
#[derive(Debug, Clone, Serialize)]
pub struct BatchError {
    pub file_name: String,
    pub cause: String,
}

/// Result of applying a preset
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub applied: usize,
    pub errors: Vec<BatchError>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of clearing the live directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearReport {
    pub cleared: usize,
    pub failed: usize,
    /// The live directory did not exist, so there was nothing to clear
    pub missing: bool,
    pub failures: Vec<(PathBuf, String)>,
}

/// The runtime's cache directory
#[derive(Debug, Clone)]
pub struct LiveCache {
    dir: PathBuf,
}

impl LiveCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Slot path for a hash
    pub fn slot_path(&self, hash: &str) -> PathBuf {
        self.dir.join(hash)
    }

    /// Number of top-level children, or `None` if the directory is missing
    pub fn slot_count(&self) -> SwapResult<Option<usize>> {
        match fs::read_dir(&self.dir) {
            Ok(read) => Ok(Some(read.count())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SwapError::io(format!("reading {}", self.dir.display()), e)),
        }
    }

    /// Overwrite the entry's slot with the entry's bytes.
    ///
    /// On failure the slot keeps whatever it held before.
    pub fn apply(&self, entry: &CacheEntry) -> SwapResult<PathBuf> {
        let slot = self.slot_path(&entry.hash);
        copy_preserving(&entry.path, &slot).map_err(|e| SwapError::copy(&entry.path, &slot, e))?;
        info!("Applied '{}' to slot {}", entry.display_name, entry.hash);
        Ok(slot)
    }

    /// Apply every member of a preset, continuing past failures
    pub fn apply_preset(&self, presets: &PresetStore, name: &str) -> SwapResult<BatchReport> {
        let mut report = BatchReport::default();

        for member in presets.members(name)? {
            let entry = match member {
                PresetMember::Entry(entry) => entry,
                PresetMember::Malformed(file_name) => {
                    warn!("Preset '{}': {} has an empty hash or display name", name, file_name);
                    report.errors.push(BatchError {
                        file_name,
                        cause: "empty hash or display name".to_string(),
                    });
                    continue;
                }
            };
            match self.apply(&entry) {
                Ok(_) => report.applied += 1,
                Err(e) => {
                    warn!("Preset '{}': {}", name, e);
                    let cause = match e {
                        SwapError::Copy { source, .. } => source.to_string(),
                        other => other.to_string(),
                    };
                    report.errors.push(BatchError {
                        file_name: entry.file_name(),
                        cause,
                    });
                }
            }
        }

        info!(
            "Preset '{}': applied {}, failed {}",
            name,
            report.applied,
            report.errors.len()
        );
        Ok(report)
    }

    /// Delete every top-level child of the live directory
    pub fn clear(&self) -> SwapResult<ClearReport> {
        self.clear_with(remove_child)
    }

    /// Clear using `remove` for each child; failures are tallied and the
    /// remaining children are still processed.
    pub(crate) fn clear_with<F>(&self, mut remove: F) -> SwapResult<ClearReport>
    where
        F: FnMut(&Path, &Metadata) -> io::Result<()>,
    {
        let read = match fs::read_dir(&self.dir) {
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("{} does not exist, nothing to clear", self.dir.display());
                return Ok(ClearReport {
                    missing: true,
                    ..ClearReport::default()
                });
            }
            Err(e) => return Err(SwapError::delete(&self.dir, e)),
        };

        let mut report = ClearReport::default();
        for child in read {
            let path = match child {
                Ok(child) => child.path(),
                Err(e) => {
                    warn!("Could not read entry of {}: {}", self.dir.display(), e);
                    report.failed += 1;
                    report.failures.push((self.dir.clone(), e.to_string()));
                    continue;
                }
            };

            match fs::symlink_metadata(&path).and_then(|meta| remove(&path, &meta)) {
                Ok(()) => {
                    debug!("Removed {}", path.display());
                    report.cleared += 1;
                }
                Err(e) => {
                    warn!("Could not delete {}: {}", path.display(), e);
                    report.failed += 1;
                    report.failures.push((path, e.to_string()));
                }
            }
        }

        info!(
            "Cleared {} children of {} ({} failed)",
            report.cleared,
            self.dir.display(),
            report.failed
        );
        Ok(report)
    }
}

/// Unlink files and symlinks, remove directories recursively
fn remove_child(path: &Path, meta: &Metadata) -> io::Result<()> {
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

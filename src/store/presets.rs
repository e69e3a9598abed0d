//! Preset store
//!
//! Each immediate subdirectory of the presets root is one preset. Its
//! immediate files follow the entry naming convention. Files without the
//! separator are ignored; files that carry it but have an empty hash or
//! display name are members that cannot be applied.

use crate::error::{SwapError, SwapResult};
use crate::store::layered::{scan_files, CacheEntry, Origin};
use crate::store::naming::{split_entry_name, validate_component, SEPARATOR};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// One file of a preset that carries the separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetMember {
    Entry(CacheEntry),
    /// Separator present but the hash or display name is empty
    Malformed(String),
}

/// Directory of named presets
#[derive(Debug, Clone)]
pub struct PresetStore {
    root: PathBuf,
}

impl PresetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Preset names in lexical order. A missing root has no presets.
    ///
    /// Directories whose names could not be looked up again are left out.
    pub fn list(&self) -> SwapResult<Vec<String>> {
        let read = match fs::read_dir(&self.root) {
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SwapError::io(
                    format!("reading {}", self.root.display()),
                    e,
                ))
            }
        };

        let mut names: Vec<String> = read
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| match validate_component("preset name", name) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping preset directory: {}", e);
                    false
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Directory of a preset, which must exist
    pub fn preset_dir(&self, name: &str) -> SwapResult<PathBuf> {
        validate_component("preset name", name)?;
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Err(SwapError::PresetNotFound(name.to_string()));
        }
        Ok(dir)
    }

    /// Files of a preset that carry the separator, in application order
    pub fn members(&self, name: &str) -> SwapResult<Vec<PresetMember>> {
        let dir = self.preset_dir(name)?;
        let origin = Origin::Preset(name.to_string());
        let members: Vec<PresetMember> = scan_files(&dir)?
            .into_iter()
            .filter(|(file_name, _)| file_name.contains(SEPARATOR))
            .map(|(file_name, path)| match split_entry_name(&file_name) {
                Some((hash, display_name)) => PresetMember::Entry(CacheEntry {
                    hash: hash.to_string(),
                    display_name: display_name.to_string(),
                    origin: origin.clone(),
                    path,
                }),
                None => PresetMember::Malformed(file_name),
            })
            .collect();
        debug!("Preset '{}' has {} members", name, members.len());
        Ok(members)
    }

    /// Well-formed entries of a preset in application order
    pub fn entries(&self, name: &str) -> SwapResult<Vec<CacheEntry>> {
        Ok(self
            .members(name)?
            .into_iter()
            .filter_map(|member| match member {
                PresetMember::Entry(entry) => Some(entry),
                PresetMember::Malformed(_) => None,
            })
            .collect())
    }
}

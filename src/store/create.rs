//! Entry creation in the own layer

use crate::error::{SwapError, SwapResult};
use crate::store::copy::copy_preserving;
use crate::store::layered::{CacheEntry, Layer, LayeredStore, Origin};
use crate::store::naming::{entry_file_name, validate_component, validate_hash};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// A new entry to materialize from an arbitrary source file
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub source_file: PathBuf,
    pub hash: String,
    pub display_name: String,
}

impl LayeredStore {
    /// Copy `new.source_file` into the own layer as `<hash> - <display name>`.
    ///
    /// An existing target is only replaced when `overwrite` is set; otherwise
    /// [`SwapError::EntryExists`] is returned and nothing is written.
    pub fn create_entry(&self, new: &NewEntry, overwrite: bool) -> SwapResult<CacheEntry> {
        let hash = new.hash.trim();
        let display_name = new.display_name.trim();
        validate_hash(hash)?;
        validate_component("display name", display_name)?;

        let own = self.layer_dir(Layer::Own);
        let target = own.join(entry_file_name(hash, display_name));

        if target.exists() && !overwrite {
            return Err(SwapError::EntryExists(target));
        }

        fs::create_dir_all(own)
            .map_err(|e| SwapError::io(format!("creating {}", own.display()), e))?;
        copy_preserving(&new.source_file, &target)
            .map_err(|e| SwapError::copy(&new.source_file, &target, e))?;

        info!("Created cache entry {}", target.display());
        Ok(CacheEntry {
            hash: hash.to_string(),
            display_name: display_name.to_string(),
            origin: Origin::Layer(Layer::Own),
            path: target,
        })
    }
}

//! Local store of alternate cache entries
//!
//! Entries are plain files named `<hash> - <display name>`. The hash is the
//! key of the runtime cache slot the entry replaces; the display name is a
//! human label and is not unique.
//!
//! # Layout
//!
//! | Directory | Written by swapcache | Description |
//! |-----------|----------------------|-------------|
//! | preinstalled | never | Provisioned entries, searched first |
//! | own | `create` | User-made entries |
//! | presets/`<name>` | never | Entries applied together as a batch |
//!
//! Nothing is cached between calls; every operation re-reads the directories.

mod copy;
pub mod create;
pub mod layered;
pub mod naming;
pub mod presets;
pub mod registry;

pub(crate) use copy::copy_preserving;
pub use create::NewEntry;
pub use layered::{CacheEntry, Layer, LayeredStore, Origin};
pub use naming::{entry_file_name, looks_like_hash, split_entry_name, SEPARATOR};
pub use presets::{PresetMember, PresetStore};
pub use registry::{FunctionDescriptor, Registry};

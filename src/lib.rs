//! swapcache - swap runtime cache entries for labelled alternates
//!
//! A runtime keeps its cache as files named by opaque hashes. swapcache keeps
//! alternate versions of those files under readable names, in a layered local
//! store and in named presets, and copies them over the runtime's slots on
//! demand.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod live;
pub mod store;
pub mod ui;

pub use engine::{ApplyOutcome, CreateOutcome, CreateRequest, Engine, HashRef, Source};
pub use error::{SwapError, SwapResult};

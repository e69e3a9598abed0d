//! CLI command implementations

pub mod apply;
pub mod clear;
pub mod completions;
pub mod config;
pub mod create;
pub mod functions;
pub mod init;
pub mod list;
pub mod status;

pub use apply::execute as apply;
pub use clear::execute as clear;
pub use completions::execute as completions;
pub use config::execute as config;
pub use create::execute as create;
pub use functions::execute as functions;
pub use init::execute as init;
pub use list::execute as list;
pub use status::execute as status;

use crate::engine::Engine;
use crate::error::{SwapError, SwapResult};
use std::sync::Arc;

/// Run a core operation on the blocking pool.
///
/// The core is synchronous filesystem work; keeping it off the runtime
/// threads lets spinners keep ticking while it runs.
pub(crate) async fn run_blocking<T, F>(engine: &Arc<Engine>, op: F) -> SwapResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Engine) -> SwapResult<T> + Send + 'static,
{
    let engine = Arc::clone(engine);
    tokio::task::spawn_blocking(move || op(&engine))
        .await
        .map_err(|e| SwapError::Internal(format!("worker task failed: {}", e)))?
}

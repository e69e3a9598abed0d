//! Interactive prompts with CI/non-interactive fallback
//!
//! cliclack blocks on stdin, so prompts run on the blocking pool.

use super::context::UiContext;
use crate::error::{SwapError, SwapResult};

/// Ask a yes/no question.
///
/// `--yes` answers yes; without a terminal the default is returned.
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> SwapResult<bool> {
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }
    if !ctx.is_interactive() {
        return Ok(default);
    }

    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| SwapError::Internal(format!("prompt task failed: {}", e)))?
    .map_err(|e| SwapError::User(format!("Prompt cancelled: {}", e)))
}

/// Pick one of `options` as `(value, label, hint)`.
///
/// Returns `None` without a terminal or when there is nothing to pick.
pub async fn select<T>(
    ctx: &UiContext,
    message: &str,
    options: Vec<(T, String, String)>,
) -> SwapResult<Option<T>>
where
    T: Clone + Eq + Send + 'static,
{
    if !ctx.is_interactive() || options.is_empty() {
        return Ok(None);
    }

    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        let mut select = cliclack::select(&message);
        for (value, label, hint) in options {
            select = select.item(value, label, hint);
        }
        select.interact()
    })
    .await
    .map_err(|e| SwapError::Internal(format!("prompt task failed: {}", e)))?
    .map(Some)
    .map_err(|e| SwapError::User(format!("Selection cancelled: {}", e)))
}

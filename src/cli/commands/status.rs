//! Status command - show configured directories and their contents

use super::run_blocking;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::SwapResult;
use crate::store::Layer;
use crate::ui::{self, UiContext};
use std::path::Path;
use std::sync::Arc;

struct Counts {
    preinstalled: usize,
    own: usize,
    presets: usize,
    live_slots: Option<usize>,
}

/// Execute the status command
pub async fn execute(config: &Config, engine: &Arc<Engine>) -> SwapResult<()> {
    let ctx = UiContext::detect();
    let paths = &config.paths;

    let counts = run_blocking(engine, |e| {
        Ok(Counts {
            preinstalled: e.store().layer_entries(Layer::Preinstalled)?.len(),
            own: e.store().layer_entries(Layer::Own)?.len(),
            presets: e.presets().list()?.len(),
            live_slots: e.live().slot_count()?,
        })
    })
    .await?;

    ui::intro(&ctx, "swapcache status");

    row(
        &ctx,
        "preinstalled",
        &paths.preinstalled_dir,
        &format!("{} entries", counts.preinstalled),
    );
    row(&ctx, "own", &paths.own_dir, &format!("{} entries", counts.own));
    row(
        &ctx,
        "presets",
        &paths.presets_dir,
        &format!("{} presets", counts.presets),
    );
    row(
        &ctx,
        "functions",
        &paths.functions_file,
        &format!("{} functions", engine.registry().len()),
    );
    match counts.live_slots {
        Some(slots) => row(&ctx, "live", &paths.live_dir, &format!("{} items", slots)),
        None => ui::key_value_status(
            &ctx,
            "live",
            &format!("{} (missing)", paths.live_dir.display()),
            false,
        ),
    }

    Ok(())
}

fn row(ctx: &UiContext, key: &str, path: &Path, summary: &str) {
    let exists = path.exists();
    let value = if exists {
        format!("{} ({})", path.display(), summary)
    } else {
        format!("{} (missing)", path.display())
    };
    ui::key_value_status(ctx, key, &value, exists);
}

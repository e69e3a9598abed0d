//! Init command - first-run setup

use crate::cli::args::InitArgs;
use crate::config::{Config, ConfigManager};
use crate::error::{SwapError, SwapResult};
use crate::store::Registry;
use crate::ui::{self, UiContext};

/// Execute the init command.
///
/// Writes the config file (unless present), creates the writable store
/// directories, and drops an example function registry if none exists.
pub async fn execute(args: InitArgs, manager: &ConfigManager) -> SwapResult<()> {
    let ctx = UiContext::detect();

    let config = if manager.path().exists() && !args.force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", manager.path().display()),
            "Use --force to overwrite",
        );
        manager.load().await?
    } else {
        let config = Config::default();
        manager.save(&config).await?;
        ui::step_ok_detail(
            &ctx,
            "Configuration written",
            &manager.path().display().to_string(),
        );
        config
    };

    ConfigManager::ensure_store_dirs(&config.paths).await?;
    ui::step_ok_detail(
        &ctx,
        "Own caches directory ready",
        &config.paths.own_dir.display().to_string(),
    );
    ui::step_ok_detail(
        &ctx,
        "Presets directory ready",
        &config.paths.presets_dir.display().to_string(),
    );

    let functions_file = config.paths.functions_file.clone();
    let written = tokio::task::spawn_blocking(move || Registry::write_template(&functions_file))
        .await
        .map_err(|e| SwapError::Internal(format!("worker task failed: {}", e)))??;
    if written {
        ui::step_warn_hint(
            &ctx,
            "Created an example functions.json",
            &format!(
                "edit {} with real hashes and descriptions",
                config.paths.functions_file.display()
            ),
        );
    }

    ui::outro_success(&ctx, "Ready");
    Ok(())
}

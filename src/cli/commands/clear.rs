//! Clear command - empty the live cache directory

use super::run_blocking;
use crate::cli::args::ClearArgs;
use crate::engine::Engine;
use crate::error::SwapResult;
use crate::ui::{self, TaskSpinner, UiContext};
use std::sync::Arc;

/// Execute the clear command
pub async fn execute(args: ClearArgs, engine: &Arc<Engine>) -> SwapResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let dir = engine.live().dir().display().to_string();

    let question = format!(
        "Delete all files and folders inside {}? This cannot be undone.",
        dir
    );
    if !ui::confirm(&ctx, &question, false).await? {
        ui::step_info(&ctx, "Aborted.");
        return Ok(());
    }

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Clearing live cache...");

    let report = match run_blocking(engine, |e| e.clear_live()).await {
        Ok(report) => report,
        Err(e) => {
            spinner.clear();
            return Err(e);
        }
    };

    if report.missing {
        spinner.clear();
        ui::step_info(&ctx, &format!("{} does not exist, nothing to clear", dir));
    } else if report.failed > 0 {
        spinner.stop_warn(&format!(
            "Cleared {} item(s), {} could not be deleted",
            report.cleared, report.failed
        ));
        for (path, cause) in &report.failures {
            ui::step_error_detail(&ctx, &path.display().to_string(), cause);
        }
    } else {
        spinner.stop(&format!("Cleared {} item(s) from {}", report.cleared, dir));
    }

    Ok(())
}

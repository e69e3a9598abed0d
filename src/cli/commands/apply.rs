//! Apply command - copy an entry or preset into the live cache

use super::run_blocking;
use crate::cli::args::ApplyArgs;
use crate::engine::{ApplyOutcome, Engine};
use crate::error::SwapResult;
use crate::ui::{self, TaskSpinner, UiContext};
use std::sync::Arc;

/// Execute the apply command
pub async fn execute(args: ApplyArgs, engine: &Arc<Engine>) -> SwapResult<()> {
    let ctx = UiContext::detect();
    let source = args.source();
    let label = args.label.clone();

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("Applying '{}'...", args.label));

    let outcome = match run_blocking(engine, move |e| e.apply(source, &label)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            spinner.clear();
            return Err(e);
        }
    };

    match outcome {
        ApplyOutcome::Single { entry, slot } => {
            spinner.stop(&format!(
                "Replaced '{}' with '{}'",
                entry.hash, entry.display_name
            ));
            ui::remark(&ctx, &slot.display().to_string());
        }
        ApplyOutcome::Batch(report) if !report.is_clean() => {
            spinner.stop_warn(&format!(
                "Applied {} file(s) from preset '{}' with {} error(s)",
                report.applied,
                args.label,
                report.errors.len()
            ));
            for error in &report.errors {
                ui::step_error_detail(
                    &ctx,
                    &format!("Could not copy {}", error.file_name),
                    &error.cause,
                );
            }
        }
        ApplyOutcome::Batch(report) if report.applied == 0 => {
            spinner.clear();
            ui::step_info(
                &ctx,
                &format!("No valid cache files found in preset '{}'", args.label),
            );
        }
        ApplyOutcome::Batch(report) => {
            spinner.stop(&format!(
                "Applied {} file(s) from preset '{}'",
                report.applied, args.label
            ));
        }
    }

    Ok(())
}

//! Functions command - show the hash registry

use crate::cli::args::{FunctionsArgs, OutputFormat};
use crate::engine::Engine;
use crate::error::SwapResult;
use crate::ui::{self, UiContext};
use console::style;
use std::path::Path;

/// Execute the functions command
pub async fn execute(
    args: FunctionsArgs,
    engine: &Engine,
    functions_file: &Path,
) -> SwapResult<()> {
    let functions = engine.registry().functions();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(functions)?),
        OutputFormat::Plain => {
            for f in functions {
                println!("{} - {}", f.hash, f.description);
            }
        }
        OutputFormat::Table if functions.is_empty() => {
            let ctx = UiContext::detect();
            ui::step_warn_hint(
                &ctx,
                "No functions loaded",
                &format!("edit {}", functions_file.display()),
            );
        }
        OutputFormat::Table => {
            println!("{:<34} {}", style("HASH").bold(), style("DESCRIPTION").bold());
            println!("{}", "-".repeat(70));
            for f in functions {
                println!("{:<34} {}", f.hash, f.description);
            }
            println!();
            println!("{} function(s)", functions.len());
        }
    }

    Ok(())
}

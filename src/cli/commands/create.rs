//! Create command - add a file to the own layer

use super::run_blocking;
use crate::cli::args::CreateArgs;
use crate::engine::{CreateOutcome, CreateRequest, Engine, HashRef};
use crate::error::{SwapError, SwapResult};
use crate::store::looks_like_hash;
use crate::ui::{self, UiContext};
use std::sync::Arc;

/// Execute the create command
pub async fn execute(args: CreateArgs, engine: &Arc<Engine>) -> SwapResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);

    let hash = choose_hash(&ctx, &args, engine).await?;
    let mut request = CreateRequest {
        source_file: args.source.clone(),
        hash,
        display_name: args.name.clone(),
        overwrite: args.force,
    };

    let outcome = submit(engine, &request).await?;
    let entry = match outcome {
        CreateOutcome::Created(entry) => entry,
        CreateOutcome::NeedsOverwriteConfirmation(path) => {
            let question = format!(
                "Cache '{}' already exists. Overwrite?",
                path.file_name().unwrap_or_default().to_string_lossy()
            );
            if !ui::confirm(&ctx, &question, false).await? {
                if ctx.is_interactive() {
                    ui::step_info(&ctx, "Left the existing entry unchanged");
                    return Ok(());
                }
                return Err(SwapError::EntryExists(path));
            }

            request.overwrite = true;
            match submit(engine, &request).await? {
                CreateOutcome::Created(entry) => entry,
                CreateOutcome::NeedsOverwriteConfirmation(path) => {
                    return Err(SwapError::EntryExists(path))
                }
            }
        }
    };

    ui::step_ok_detail(
        &ctx,
        &format!("Created cache '{}'", entry.file_name()),
        &entry.path.display().to_string(),
    );
    Ok(())
}

async fn submit(engine: &Arc<Engine>, request: &CreateRequest) -> SwapResult<CreateOutcome> {
    let request = request.clone();
    run_blocking(engine, move |e| e.create_entry(&request)).await
}

/// Hash from --hash, --function, or an interactive pick from the registry
async fn choose_hash(ctx: &UiContext, args: &CreateArgs, engine: &Engine) -> SwapResult<HashRef> {
    if let Some(hash) = &args.hash {
        if !looks_like_hash(hash.trim()) {
            ui::step_warn_hint(
                ctx,
                &format!("'{}' does not look like a standard hash", hash.trim()),
                "expected 32 hex characters, continuing anyway",
            );
        }
        return Ok(HashRef::Hash(hash.clone()));
    }

    if let Some(description) = &args.function {
        return Ok(HashRef::Description(description.clone()));
    }

    let options: Vec<(String, String, String)> = engine
        .registry()
        .functions()
        .iter()
        .map(|f| (f.hash.clone(), f.description.clone(), f.hash.clone()))
        .collect();

    match ui::select(ctx, "Select function (hash)", options).await? {
        Some(hash) => Ok(HashRef::Hash(hash)),
        None => Err(SwapError::Validation(
            "a hash is required: pass --hash or --function".to_string(),
        )),
    }
}

//! swapcache CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use std::sync::Arc;
use swapcache::cli::{commands, Cli, Commands};
use swapcache::config::ConfigManager;
use swapcache::engine::Engine;
use swapcache::error::SwapResult;
use swapcache::ui;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber: 0 = warn, 1 = info, 2+ = debug.
///
/// Logs go to stderr so listings on stdout stay machine-readable.
fn init_logging(verbose: u8, format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("swapcache=warn"),
        1 => EnvFilter::new("swapcache=info"),
        _ => EnvFilter::new("swapcache=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run() -> SwapResult<()> {
    let cli = Cli::parse();

    // Completions need no configuration at all
    if let Commands::Completions { shell } = cli.command {
        return commands::completions(shell);
    }

    let manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // Init must work even when the existing config is unreadable
    if let Commands::Init(args) = cli.command {
        init_logging(cli.verbose, "text");
        return commands::init(args, &manager).await;
    }

    let config = manager.load().await?;
    init_logging(cli.verbose, &config.general.log_format);
    debug!("Using config {}", manager.path().display());

    ConfigManager::ensure_store_dirs(&config.paths).await?;
    ui::init_theme();

    let engine = Arc::new(Engine::from_paths(&config.paths));

    match cli.command {
        Commands::Completions { .. } | Commands::Init(_) => unreachable!("handled above"),
        Commands::List(args) => commands::list(args, &engine).await,
        Commands::Apply(args) => commands::apply(args, &engine).await,
        Commands::Create(args) => commands::create(args, &engine).await,
        Commands::Clear(args) => commands::clear(args, &engine).await,
        Commands::Functions(args) => {
            commands::functions(args, &engine, &config.paths.functions_file).await
        }
        Commands::Status => commands::status(&config, &engine).await,
        Commands::Config(args) => commands::config(args, &config, &manager).await,
    }
}

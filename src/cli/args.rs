//! CLI argument definitions using clap derive

use crate::engine::Source;
use clap::{ArgAction, ArgGroup, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// swapcache - swap runtime cache entries for labelled alternates
///
/// Keeps alternate cache files under readable names and copies them over
/// the runtime's hash-named cache slots on demand.
#[derive(Parser, Debug)]
#[command(name = "swapcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SWAPCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cache entries or presets
    List(ListArgs),

    /// Copy a cache entry or a whole preset into the live cache
    Apply(ApplyArgs),

    /// Add a file to your own caches under a hash and display name
    Create(CreateArgs),

    /// Delete everything in the live cache directory
    Clear(ClearArgs),

    /// List known functions from the registry
    Functions(FunctionsArgs),

    /// Show configured directories and what they contain
    Status,

    /// Write default configuration and create the store directories
    Init(InitArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// List presets instead of cache entries
    #[arg(short, long)]
    pub presets: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

impl ListArgs {
    pub fn source(&self) -> Source {
        source(self.presets)
    }
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Display name of the entry, or preset name with --preset
    pub label: String,

    /// Apply a preset
    #[arg(short, long)]
    pub preset: bool,
}

impl ApplyArgs {
    pub fn source(&self) -> Source {
        source(self.preset)
    }
}

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("hash_source").args(["hash", "function"])))]
pub struct CreateArgs {
    /// File whose bytes become the new entry
    pub source: PathBuf,

    /// Display name for the entry
    #[arg(short, long)]
    pub name: String,

    /// Hash of the live cache slot to replace
    #[arg(long)]
    pub hash: Option<String>,

    /// Take the hash from the registry function with this description
    #[arg(long)]
    pub function: Option<String>,

    /// Overwrite an existing entry without asking
    #[arg(short, long)]
    pub force: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the functions command
#[derive(Parser, Debug)]
pub struct FunctionsArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., paths.live_dir)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

fn source(presets: bool) -> Source {
    if presets {
        Source::Presets
    } else {
        Source::Caches
    }
}

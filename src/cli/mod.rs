//! Command-line interface for quotekeep.
//!
//! Provides scriptable access to the quote collection:
//! - `add`: Add a quote to the collection
//! - `random`: Show a random quote
//! - `list`: List quotes, optionally filtered by category
//! - `categories`: List the category selector options
//! - `import` / `export`: Move the collection through JSON documents
//! - `sync`: Run one reconciliation cycle against the remote source
//! - `watch`: Sync immediately, then keep syncing on a fixed interval

mod commands;

pub use commands::*;

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::Config;
use crate::error::Result;

/// Quote collection manager with remote sync.
#[derive(Debug, Parser)]
#[command(name = "qk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the quotes file (default: platform data dir).
    #[arg(short = 'd', long, global = true, env = "QUOTEKEEP_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Path to a custom configuration file.
    #[arg(long, global = true, env = "QUOTEKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remote endpoint URL override.
    #[arg(long, global = true, env = "QUOTEKEEP_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Output format for structured data.
    #[arg(short = 'o', long, global = true, default_value = "text", env = "QUOTEKEEP_OUTPUT")]
    pub output: OutputFormat,

    /// Output as JSON (shorthand for -o json).
    #[arg(long, global = true, env = "QUOTEKEEP_JSON")]
    pub json: bool,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true, env = "QUOTEKEEP_QUIET")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", env = "QUOTEKEEP_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format (text, json, compact, pretty).
    #[arg(long, global = true, default_value = "text", env = "QUOTEKEEP_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Get effective output format.
    #[must_use]
    pub fn effective_output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a quote to the collection.
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show a random quote.
    #[command(alias = "r")]
    Random,

    /// List quotes, optionally filtered by category.
    #[command(alias = "ls")]
    List(ListArgs),

    /// List the distinct categories.
    #[command(alias = "cats")]
    Categories,

    /// Import quotes from a JSON document.
    Import(ImportArgs),

    /// Export the collection as a JSON document.
    #[command(alias = "x")]
    Export(ExportArgs),

    /// Run one sync cycle against the remote source.
    #[command(alias = "s")]
    Sync(SyncArgs),

    /// Sync now, then keep syncing on a fixed interval.
    #[command(alias = "w")]
    Watch(WatchArgs),

    /// View and initialize configuration.
    #[command(alias = "cfg")]
    Config(ConfigArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// The quote text.
    pub text: String,

    /// The quote category.
    #[arg(short = 'c', long)]
    pub category: String,

    /// Skip submitting the new quote to the remote endpoint.
    #[arg(long)]
    pub local_only: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Category to filter by ("all" for every quote).
    #[arg(short = 'c', long, default_value = "all")]
    pub category: String,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// JSON file holding an array of {text, category} records.
    pub file: PathBuf,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file path (stdout if not specified).
    #[arg(short = 'O', long = "out")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the sync command.
#[derive(Debug, Parser)]
pub struct SyncArgs {
    /// Category filter used for the post-sync listing.
    #[arg(short = 'c', long, default_value = "all")]
    pub category: String,

    /// Conflict resolution mode.
    #[arg(short = 'r', long, default_value = "prompt")]
    pub resolve: ResolveMode,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    /// Seconds between sync cycles (default from config, 60).
    #[arg(short = 'i', long)]
    pub interval: Option<u64>,

    /// Category filter used for the post-sync listing.
    #[arg(short = 'c', long, default_value = "all")]
    pub category: String,

    /// Conflict resolution mode.
    #[arg(short = 'r', long, default_value = "prompt")]
    pub resolve: ResolveMode,
}

/// Conflict resolution modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResolveMode {
    /// Ask interactively for every conflict.
    #[default]
    Prompt,
    /// Keep the local version of every conflicting quote.
    KeepLocal,
    /// Take the server's version of every conflicting quote.
    TakeRemote,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Config action to perform.
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommand actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show the configuration file path.
    Path,

    /// Write a configuration file with defaults.
    Init,
}

/// Arguments for the completions command.
#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generate shell completions and print to stdout.
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "qk", &mut io::stdout());
}

/// Output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Tab-separated values.
    Tsv,
    /// Compact single-line output.
    Compact,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter level.
    #[must_use]
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// Structured JSON format for machine consumption.
    Json,
    /// Compact single-line format.
    Compact,
    /// Pretty format with full details.
    Pretty,
}

/// Initialize tracing/logging based on CLI options.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{
        fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_string()));

    let result = match cli.log_format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let config = match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
            Config::default()
        }),
        None => Config::load().unwrap_or_default(),
    };

    match &cli.command {
        Commands::Add(args) => commands::add::run(&cli, &config, args),
        Commands::Random => commands::random::run(&cli, &config),
        Commands::List(args) => commands::list::run(&cli, &config, args),
        Commands::Categories => commands::categories::run(&cli, &config),
        Commands::Import(args) => commands::import::run(&cli, &config, args),
        Commands::Export(args) => commands::export::run(&cli, &config, args),
        Commands::Sync(args) => commands::sync::run(&cli, &config, args),
        Commands::Watch(args) => commands::watch::run(&cli, &config, args),
        Commands::Config(args) => commands::config::run(&cli, &config, args),
        Commands::Completions(args) => {
            generate_completions(args.shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_shorthand() {
        let cli = Cli::parse_from(["qk", "--json", "list"]);
        assert_eq!(cli.effective_output(), OutputFormat::Json);
    }

    #[test]
    fn test_log_level_to_filter() {
        assert_eq!(LogLevel::Error.to_filter_string(), "error");
        assert_eq!(LogLevel::Trace.to_filter_string(), "trace");
    }
}

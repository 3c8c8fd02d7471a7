//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::commands;

/// Affected Roots - Find the Terraform root modules affected by changed files
#[derive(Parser, Debug)]
#[command(name = "affected-roots")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level. `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, value_enum, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the root modules affected by a list of changed files
    Find(commands::find::FindArgs),

    /// Tell whether a directory is a root module
    IsRoot(commands::is_root::IsRootArgs),

    /// List the directories that call a module
    Callers(commands::callers::CallersArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Log verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        match self.command {
            Commands::Find(args) => commands::find::execute(args),
            Commands::IsRoot(args) => commands::is_root::execute(args),
            Commands::Callers(args) => commands::callers::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Send log records to stderr, without timestamps.
fn init_logging(level: LogLevel) {
    let filter = LevelFilter::from(level).to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

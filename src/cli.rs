// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `watchignore`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchignore",
    version,
    about = "Show which paths a site watcher ignores, including *.TMP files.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the site config file (TOML).
    ///
    /// If omitted, `_config.toml` in the current working directory is used
    /// when present, otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Site source directory; overrides `source` from the config file.
    #[arg(long, value_name = "DIR")]
    pub source: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHIGNORE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Paths to check. Without any, the effective ignore list is printed.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::build::Engine;

/// Command-line arguments for `texwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "texwatch",
    version,
    about = "Rebuild a LaTeX document whenever its source changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the file to watch (and to hand to the build action).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// LaTeX engine to compile with.
    ///
    /// Lowest-priority action: `--script` and `--make` win if also given.
    #[arg(long, value_enum, value_name = "ENGINE")]
    pub engine: Option<Engine>,

    /// External build script, invoked with the watched file's base name.
    ///
    /// Highest-priority action.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Build via `make -B` (forced full rebuild) instead of an engine/script.
    #[arg(long)]
    pub make: bool,

    /// Watch the file's whole directory: trigger on the newest modification
    /// time among files sharing the watched file's extension.
    #[arg(long)]
    pub dir: bool,

    /// Run the build action once on the first tick instead of silently
    /// recording the current state as the baseline.
    #[arg(long)]
    pub build_first: bool,

    /// Poll interval in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 1)]
    pub interval: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TEXWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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

// src/lib.rs

pub mod build;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod watch;

use std::sync::Arc;
use std::time::Duration;

use crate::build::{BuildAction, ProcessExecutor};
use crate::cli::CliArgs;
use crate::engine::{BuildState, Runtime};
use crate::errors::Result;
use crate::fs::RealFileSystem;
use crate::watch::{ensure_readable, Detector, WatchTarget};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - action selection from the CLI
/// - the change detector over the real filesystem
/// - the poll-loop runtime with the real process executor
/// - Ctrl-C handling (inside the runtime loop)
pub async fn run(args: CliArgs) -> Result<()> {
    // Misconfiguration (no action, unreadable target) is reported here,
    // before the loop starts, not on the first tick.
    let action = BuildAction::select(args.script, args.make, args.engine)?;
    let target = WatchTarget::new(args.file, args.dir)?;

    let fs = Arc::new(RealFileSystem);
    ensure_readable(fs.as_ref(), &target)?;

    let detector = Detector::new(fs, target);
    let state = BuildState::new(args.build_first);
    let executor = ProcessExecutor;

    let interval = Duration::from_secs(args.interval.max(1));

    let runtime = Runtime::new(detector, action, state, executor, interval);
    runtime.run().await
}

// src/build/runner.rs

//! Individual build process runner.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::build::action::BuildAction;
use crate::errors::{Result, TexwatchError};
use crate::watch::WatchTarget;

/// Result of one build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed(i32), // exit code
}

/// Trait abstracting how build actions are executed.
///
/// Production code uses [`ProcessExecutor`]; tests can provide their own
/// implementation that records dispatches without spawning real processes.
pub trait BuildExecutor: Send {
    /// Run the action against the target, to completion.
    fn dispatch<'a>(
        &'a mut self,
        action: &'a BuildAction,
        target: &'a WatchTarget,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + 'a>>;
}

/// Real executor backend used in production: spawns the configured command
/// with `tokio::process` and waits for it.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl BuildExecutor for ProcessExecutor {
    fn dispatch<'a>(
        &'a mut self,
        action: &'a BuildAction,
        target: &'a WatchTarget,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + 'a>> {
        Box::pin(run_build(action, target))
    }
}

/// Newlines fed to the child's stdin. LaTeX engines stop on recoverable
/// errors with an interactive "press Enter to continue" prompt; a run of
/// newlines dismisses those so the build always runs to completion.
const STDIN_NEWLINES: &[u8] = &[b'\n'; 64];

async fn run_build(action: &BuildAction, target: &WatchTarget) -> Result<BuildOutcome> {
    let spec = action.command(target.file_name());
    let dir = target.dir();

    info!(
        program = %spec.program.to_string_lossy(),
        working_dir = %dir.display(),
        "starting build process"
    );

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| TexwatchError::Spawn {
        program: spec.program.to_string_lossy().into_owned(),
        source,
    })?;

    if let Some(mut stdin) = child.stdin.take() {
        // The child may exit without reading; a broken pipe here is fine.
        if let Err(err) = stdin.write_all(STDIN_NEWLINES).await {
            debug!(error = %err, "could not write to child stdin");
        }
        // Dropping stdin closes the pipe so the child never blocks on reads.
    }

    let output = child
        .wait_with_output()
        .await
        .with_context(|| format!("waiting for build process '{action}'"))?;

    relay_stream(&output.stdout);
    relay_stream(&output.stderr);

    let code = output.status.code().unwrap_or(-1);
    if output.status.success() {
        info!(exit_code = code, "build process exited");
        Ok(BuildOutcome::Success)
    } else {
        // A failed build is not an error for the watcher: the operator reads
        // the relayed output, and the next source change retries naturally.
        warn!(exit_code = code, "build process reported failure");
        Ok(BuildOutcome::Failed(code))
    }
}

/// Print one captured output stream to the operator console.
///
/// Decoding is best-effort: output that is not valid UTF-8 is dropped rather
/// than escalated.
fn relay_stream(bytes: &[u8]) {
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.is_empty() => println!("{text}"),
        Ok(_) => {}
        Err(err) => debug!(error = %err, "discarding undecodable build output"),
    }
}

// tests/output_streams.rs

//! Stream-separation test against the compiled binary: relayed build output
//! belongs on stdout, status/log lines on stderr. Unix-only: relies on
//! `/bin/sh` and killing the watcher process.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[test]
fn relayed_build_output_on_stdout_logs_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let tex = dir.path().join("main.tex");
    std::fs::write(&tex, "\\documentclass{article}").unwrap();

    let script = dir.path().join("build.sh");
    write_script(&script, "echo \"compiled $1\"");

    // `--build-first` dispatches on the first tick, so one build's output is
    // available almost immediately.
    let mut child = Command::new(env!("CARGO_BIN_EXE_texwatch"))
        .arg(&tex)
        .arg("--script")
        .arg(&script)
        .arg("--build-first")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The watcher never exits on its own; give it time for the first
    // dispatch, then stop it.
    std::thread::sleep(Duration::from_secs(3));
    child.kill().unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // The build's own output is relayed on stdout, and only there.
    assert!(
        stdout.contains("compiled main.tex"),
        "expected relayed build output on stdout, got: {stdout:?}"
    );
    assert!(!stderr.contains("compiled main.tex"));

    // Status lines go to stderr, leaving stdout free for build output.
    assert!(
        stderr.contains("texwatch runtime started"),
        "expected startup log line on stderr, got: {stderr:?}"
    );
    assert!(!stdout.contains("texwatch runtime started"));
    assert!(!stdout.contains("running build"));
}

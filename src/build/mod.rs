// src/build/mod.rs

//! Build dispatch layer.
//!
//! This module is responsible for actually running the configured build
//! command when a change is detected, using `tokio::process::Command`:
//!
//! - [`action`] models which command to run ([`BuildAction`]) and how its
//!   command line is assembled.
//! - [`runner`] owns the [`BuildExecutor`] abstraction and the real process
//!   spawning, stdin auto-confirm, and output relay.

pub mod action;
pub mod runner;

pub use action::{BuildAction, CommandSpec, Engine};
pub use runner::{BuildExecutor, BuildOutcome, ProcessExecutor};

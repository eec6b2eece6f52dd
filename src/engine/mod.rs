// src/engine/mod.rs

//! Poll-loop engine for texwatch.
//!
//! This module ties together:
//! - the pure per-tick decision core ([`state`])
//! - the async runtime shell that reacts to:
//!   - interval ticks
//!   - shutdown signals (Ctrl-C)

pub mod runtime;
pub mod state;

pub use runtime::Runtime;
pub use state::{BuildState, Tick};

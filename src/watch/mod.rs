// src/watch/mod.rs

//! Change detection layer.
//!
//! This module owns the notion of the "current version" of the watched
//! target:
//! - [`target`] describes what is being watched (one file, or a directory
//!   filtered by extension).
//! - [`marker`] is the scalar modification-time marker compared across ticks.
//! - [`detector`] computes the current marker through the [`crate::fs`]
//!   abstraction.

pub mod detector;
pub mod marker;
pub mod target;

pub use detector::{ensure_readable, has_changed, Detector};
pub use marker::Marker;
pub use target::{ScanMode, WatchTarget};

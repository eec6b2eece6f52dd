// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexwatchError {
    #[error("cannot read watched target {path:?}")]
    TargetUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("no build action configured: pass --script, --make or --engine")]
    NoAction,

    #[error("failed to spawn build command '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TexwatchError>;

// src/build/action.rs

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::errors::{Result, TexwatchError};

/// Closed set of supported LaTeX engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    Pdflatex,
    Lualatex,
    Xelatex,
    Tectonic,
}

impl Engine {
    /// Name of the engine binary on `PATH`.
    pub fn program(&self) -> &'static str {
        match self {
            Engine::Pdflatex => "pdflatex",
            Engine::Lualatex => "lualatex",
            Engine::Xelatex => "xelatex",
            Engine::Tectonic => "tectonic",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// The external command to run when a change is detected.
///
/// Exactly one action is configured per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildAction {
    /// External executable, invoked with the watched file's base name.
    Script(PathBuf),
    /// `make -B`: forced full rebuild, no target argument; `make`'s own
    /// dependency rules decide what gets rebuilt.
    Make,
    /// Direct LaTeX engine invocation with the watched file's base name.
    Latex(Engine),
}

/// Program + argument list for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl BuildAction {
    /// Resolve the configured action from the CLI options.
    ///
    /// Priority when several are given: script > make > engine. Supplying
    /// none is a configuration error reported before the loop starts.
    pub fn select(script: Option<PathBuf>, make: bool, engine: Option<Engine>) -> Result<Self> {
        if let Some(script) = script {
            return Ok(BuildAction::Script(script));
        }
        if make {
            return Ok(BuildAction::Make);
        }
        if let Some(engine) = engine {
            return Ok(BuildAction::Latex(engine));
        }
        Err(TexwatchError::NoAction)
    }

    /// The concrete command line for this action against `file_name`.
    ///
    /// `Make` ignores `file_name` entirely.
    pub fn command(&self, file_name: &OsStr) -> CommandSpec {
        match self {
            BuildAction::Script(path) => CommandSpec {
                program: path.clone().into_os_string(),
                args: vec![file_name.to_os_string()],
            },
            BuildAction::Make => CommandSpec {
                program: OsString::from("make"),
                args: vec![OsString::from("-B")],
            },
            BuildAction::Latex(engine) => CommandSpec {
                program: OsString::from(engine.program()),
                args: vec![file_name.to_os_string()],
            },
        }
    }
}

impl fmt::Display for BuildAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildAction::Script(path) => write!(f, "{}", path.display()),
            BuildAction::Make => f.write_str("make -B"),
            BuildAction::Latex(engine) => fmt::Display::fmt(engine, f),
        }
    }
}

// src/watch/target.rs

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::errors::Result;

/// How the watched target is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Watch the named file alone.
    SingleFile,
    /// Watch the file's whole directory, filtered by extension.
    Directory,
}

/// The file (or directory of files) under observation.
///
/// Fixed at startup and immutable for the process lifetime. In
/// [`ScanMode::Directory`] the scanned directory is the watched file's parent
/// and the filter matches files sharing the watched file's extension; a file
/// with no extension matches every regular file in the directory.
#[derive(Clone)]
pub struct WatchTarget {
    file: PathBuf,
    mode: ScanMode,
    filter: Option<GlobSet>,
}

impl fmt::Debug for WatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchTarget")
            .field("file", &self.file)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl WatchTarget {
    pub fn new(file: PathBuf, directory_mode: bool) -> Result<Self> {
        let (mode, filter) = if directory_mode {
            let pattern = match file.extension().and_then(OsStr::to_str) {
                Some(ext) => format!("*.{ext}"),
                None => "*".to_string(),
            };
            (ScanMode::Directory, Some(build_globset(&pattern)?))
        } else {
            (ScanMode::SingleFile, None)
        };

        Ok(Self { file, mode, filter })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// The directory containing the watched file.
    ///
    /// This is both the directory scanned in [`ScanMode::Directory`] and the
    /// working directory handed to every build invocation, so that relative
    /// auxiliary files (bibliographies, style files, intermediates) resolve.
    pub fn dir(&self) -> &Path {
        match self.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Base name of the watched file, as passed to engine/script invocations.
    pub fn file_name(&self) -> &OsStr {
        self.file.file_name().unwrap_or(self.file.as_os_str())
    }

    /// Whether a directory entry with this name is part of the watched set.
    pub fn matches(&self, name: &str) -> bool {
        match &self.filter {
            Some(set) => set.is_match(name),
            None => true,
        }
    }
}

/// Build a GlobSet from a single string pattern.
fn build_globset(pattern: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let glob = Glob::new(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;
    builder.add(glob);
    Ok(builder.build().context("building extension globset")?)
}

// src/watch/detector.rs

use std::sync::Arc;

use anyhow::anyhow;
use tracing::{debug, trace};

use crate::errors::{Result, TexwatchError};
use crate::fs::FileSystem;
use crate::watch::marker::Marker;
use crate::watch::target::{ScanMode, WatchTarget};

/// Computes the current version marker of a [`WatchTarget`].
///
/// All filesystem access goes through the [`FileSystem`] trait so that tests
/// can drive the detector with hand-picked modification times.
#[derive(Debug)]
pub struct Detector {
    fs: Arc<dyn FileSystem>,
    target: WatchTarget,
}

impl Detector {
    pub fn new(fs: Arc<dyn FileSystem>, target: WatchTarget) -> Self {
        Self { fs, target }
    }

    pub fn target(&self) -> &WatchTarget {
        &self.target
    }

    /// Current marker of the watched target.
    ///
    /// - Single-file mode: the file's modification time. A missing or
    ///   unreadable file is [`TexwatchError::TargetUnreadable`].
    /// - Directory mode: the maximum modification time among regular files in
    ///   the target directory matching the extension filter. An empty match
    ///   set yields [`Marker::ZERO`], which is not an error; such a target
    ///   simply never triggers until a matching file appears.
    pub fn current_marker(&self) -> Result<Marker> {
        match self.target.mode() {
            ScanMode::SingleFile => {
                let mtime = self.fs.modified(self.target.file()).map_err(|source| {
                    TexwatchError::TargetUnreadable {
                        path: self.target.file().to_path_buf(),
                        source,
                    }
                })?;
                Ok(Marker::from(mtime))
            }
            ScanMode::Directory => self.directory_marker(),
        }
    }

    fn directory_marker(&self) -> Result<Marker> {
        let dir = self.target.dir();
        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|source| TexwatchError::TargetUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut newest = Marker::ZERO;
        for path in entries {
            if !self.fs.is_file(&path) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !self.target.matches(name) {
                continue;
            }

            // A file can vanish between the listing and the stat; skip it
            // rather than failing the whole tick.
            match self.fs.modified(&path) {
                Ok(mtime) => {
                    let marker = Marker::from(mtime);
                    trace!(?path, %marker, "matched file");
                    if marker > newest {
                        newest = marker;
                    }
                }
                Err(err) => {
                    debug!(?path, error = %err, "skipping unstattable file");
                }
            }
        }

        Ok(newest)
    }
}

/// True iff `current` is strictly newer than `last`.
///
/// Equal markers never count as a change, including the sentinel
/// [`Marker::ZERO`] compared with itself.
pub fn has_changed(current: Marker, last: Marker) -> bool {
    current > last
}

/// Convenience used by startup code to fail fast on an unreadable single-file
/// target before entering the poll loop.
pub fn ensure_readable(fs: &dyn FileSystem, target: &WatchTarget) -> Result<()> {
    if target.mode() == ScanMode::SingleFile && !fs.is_file(target.file()) {
        return Err(TexwatchError::TargetUnreadable {
            path: target.file().to_path_buf(),
            source: anyhow!("not a regular file"),
        });
    }
    Ok(())
}

// src/watch/marker.rs

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Scalar "how recently modified" value for a watched target.
///
/// Ordering is the whole point: a strictly greater marker means the target
/// has changed since the smaller one was recorded. Equal markers never count
/// as a change, including the [`Marker::ZERO`] sentinel compared with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marker(SystemTime);

impl Marker {
    /// Sentinel meaning "never modified" / "nothing observed yet".
    ///
    /// Any real file modification time is newer than this, so comparing a
    /// fresh stat against `ZERO` always reports a change.
    pub const ZERO: Marker = Marker(UNIX_EPOCH);

    pub fn as_system_time(&self) -> SystemTime {
        self.0
    }

    /// Seconds since the epoch, for human-readable logging.
    ///
    /// Pre-epoch timestamps clamp to 0 rather than failing; they only occur
    /// on filesystems with deliberately bogus mtimes.
    pub fn as_epoch_secs(&self) -> u64 {
        self.0
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs()
    }
}

impl From<SystemTime> for Marker {
    fn from(t: SystemTime) -> Self {
        Marker(t)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_epoch_secs())
    }
}

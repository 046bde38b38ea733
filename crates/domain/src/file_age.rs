use std::fmt;
use std::time::{Duration, SystemTime};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;

/// Elapsed wall-clock time since a file was last written.
///
/// Renders in the largest unit that is at least one whole unit, always with
/// two decimals: `3.50 days`, `2.00 hours`, `1.25 minutes`, `0.40 seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileAge(Duration);

impl FileAge {
    pub fn new(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Age of something last touched at `modified`. Timestamps ahead of
    /// `now` clamp to zero.
    pub fn between(modified: SystemTime, now: SystemTime) -> Self {
        Self(now.duration_since(modified).unwrap_or_default())
    }
}

impl fmt::Display for FileAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs_f64();
        if secs >= SECS_PER_DAY {
            write!(f, "{:.2} days", secs / SECS_PER_DAY)
        } else if secs >= SECS_PER_HOUR {
            write!(f, "{:.2} hours", secs / SECS_PER_HOUR)
        } else if secs >= SECS_PER_MINUTE {
            write!(f, "{:.2} minutes", secs / SECS_PER_MINUTE)
        } else {
            write!(f, "{:.2} seconds", secs)
        }
    }
}

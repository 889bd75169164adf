use chrono::Utc;

use crate::{Clock, Timestamp};

/// Real system clock for production use
///
/// Returns the current wall-clock time on every call, with no caching or
/// buffering. Use this wherever real-time behavior is wanted.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

use kairos_core::{Clock, SystemClock};

use crate::{EpochMillis, MillisClock};

/// System-backed legacy clock
///
/// Reads the platform wall clock on every call and narrows the reading to
/// the containing millisecond.
pub struct SystemMillisClock {
    inner: SystemClock,
}

impl SystemMillisClock {
    pub fn new() -> Self {
        Self {
            inner: SystemClock::new(),
        }
    }
}

impl Default for SystemMillisClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisClock for SystemMillisClock {
    fn now_millis(&self) -> EpochMillis {
        EpochMillis::from_timestamp(self.inner.now())
    }

    fn name(&self) -> &str {
        "SystemMillisClock"
    }
}

use crate::{EpochMillis, MillisClock};

/// Legacy clock that always returns one immutable value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMillisClock {
    millis: EpochMillis,
}

impl FixedMillisClock {
    pub fn new(millis: EpochMillis) -> Self {
        Self { millis }
    }

    /// The value this clock is pinned to
    pub fn millis(&self) -> EpochMillis {
        self.millis
    }
}

impl From<EpochMillis> for FixedMillisClock {
    fn from(millis: EpochMillis) -> Self {
        Self::new(millis)
    }
}

impl MillisClock for FixedMillisClock {
    fn now_millis(&self) -> EpochMillis {
        self.millis
    }

    fn name(&self) -> &str {
        "FixedMillisClock"
    }
}

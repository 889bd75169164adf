use kairos_core::{Clock, Timestamp};

use crate::{EpochMillis, MillisClock};

/// Legacy view of a standard clock
///
/// Each query narrows the wrapped clock's reading to the containing
/// millisecond (floor). Instant equivalence is preserved within the
/// documented precision: the narrowed reading identifies the same point in
/// time truncated to millisecond resolution.
pub struct MillisView<C: Clock> {
    inner: C,
}

impl<C: Clock> MillisView<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Get reference to the underlying clock
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clock> MillisClock for MillisView<C> {
    fn now_millis(&self) -> EpochMillis {
        EpochMillis::from_timestamp(self.inner.now())
    }

    fn name(&self) -> &str {
        "MillisView"
    }
}

/// Standard view of a legacy clock
///
/// Implements the standard capability on top of a millisecond source;
/// every reading is a whole-millisecond [`Timestamp`]. Widening is exact,
/// so round-tripping through both views is the identity for any instant
/// representable in both.
pub struct TimestampView<M: MillisClock> {
    inner: M,
}

impl<M: MillisClock> TimestampView<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Get reference to the underlying legacy clock
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: MillisClock> Clock for TimestampView<M> {
    fn now(&self) -> Timestamp {
        self.inner.now_millis().to_timestamp()
    }

    fn name(&self) -> &str {
        "TimestampView"
    }
}

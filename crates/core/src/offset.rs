use chrono::Duration;

use crate::{Clock, Timestamp};

/// Clock that shifts another clock by a constant offset
///
/// Every reading is the inner clock's reading plus the offset, which may be
/// positive (ahead) or negative (behind). Useful for simulating clock skew
/// between hosts that share a time source.
pub struct OffsetClock<C: Clock> {
    inner: C,
    offset: Duration,
    name: String,
}

impl<C: Clock> OffsetClock<C> {
    /// Create a new offset clock
    ///
    /// # Arguments
    /// * `inner` - The clock to shift
    /// * `offset` - Shift applied to every reading (positive = ahead, negative = behind)
    pub fn new(inner: C, offset: Duration) -> Self {
        Self::named(inner, offset, "OffsetClock")
    }

    /// Create an offset clock with an explicit name for diagnostics
    pub fn named(inner: C, offset: Duration, name: impl Into<String>) -> Self {
        Self {
            inner,
            offset,
            name: name.into(),
        }
    }

    /// Get the configured offset
    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Get reference to the underlying clock
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn now(&self) -> Timestamp {
        self.inner.now() + self.offset
    }

    fn name(&self) -> &str {
        &self.name
    }
}

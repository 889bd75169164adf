use chrono::Duration;
use kairos_core::ClockResult;
use kairos_millis::{EpochMillis, MillisClock};

/// Explicit mutation surface shared by the adjustable legacy doubles
///
/// Same rules as `kairos_testing::MutableClock`: zero is a no-op, negative
/// durations and retrograde advances are rejected.
pub trait MutableMillisClock: MillisClock {
    /// Advance the clock by a duration, counted in whole milliseconds
    fn bump(&self, duration: Duration) -> ClockResult<()>;

    /// Jump forward to an absolute value
    fn advance_to(&self, target: EpochMillis) -> ClockResult<()>;

    /// Advance by a number of milliseconds
    fn bump_millis(&self, millis: i64) -> ClockResult<()> {
        self.bump(Duration::milliseconds(millis))
    }

    /// Advance by a number of seconds
    fn bump_seconds(&self, secs: i64) -> ClockResult<()> {
        self.bump(Duration::seconds(secs))
    }
}

use chrono::Duration;
use kairos_core::{Clock, ClockResult, Timestamp};

/// Explicit mutation surface shared by the adjustable test doubles
///
/// Time only ever moves forward, and only through these calls.
pub trait MutableClock: Clock {
    /// Advance the clock by a duration
    ///
    /// A zero duration is a no-op. A negative duration is rejected with
    /// [`ClockError::NegativeDuration`](kairos_core::ClockError).
    fn bump(&self, duration: Duration) -> ClockResult<()>;

    /// Jump forward to an absolute instant
    ///
    /// A target equal to the current reading is a no-op. A target earlier
    /// than the current reading is rejected with
    /// [`ClockError::RetrogradeAdvance`](kairos_core::ClockError).
    fn advance_to(&self, target: Timestamp) -> ClockResult<()>;

    /// Advance by a number of milliseconds
    fn bump_millis(&self, millis: i64) -> ClockResult<()> {
        self.bump(Duration::milliseconds(millis))
    }

    /// Advance by a number of seconds
    fn bump_seconds(&self, secs: i64) -> ClockResult<()> {
        self.bump(Duration::seconds(secs))
    }
}

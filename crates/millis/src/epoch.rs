use std::fmt;

use chrono::{DateTime, Duration, Utc};
use kairos_core::Timestamp;
use serde::{Deserialize, Serialize};

/// Signed milliseconds since the Unix epoch
///
/// The legacy time representation: equality and ordering are total, and
/// serialization is a bare integer.
///
/// ```
/// use kairos_millis::EpochMillis;
///
/// let m = EpochMillis::new(1_500);
/// assert_eq!(m.to_timestamp().timestamp_millis(), 1_500);
/// assert!(EpochMillis::UNIX_EPOCH < m);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub const UNIX_EPOCH: EpochMillis = EpochMillis(0);

    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Narrow a timestamp to the containing millisecond
    ///
    /// Floors toward negative infinity; the sub-millisecond remainder is
    /// discarded.
    pub fn from_timestamp(ts: Timestamp) -> Self {
        Self(ts.timestamp_millis())
    }

    /// Widen to a timestamp with a zero sub-millisecond field
    ///
    /// Exact for every value chrono can represent; values beyond that
    /// range saturate to `DateTime::<Utc>::MIN_UTC` / `MAX_UTC`.
    pub fn to_timestamp(self) -> Timestamp {
        match DateTime::from_timestamp_millis(self.0) {
            Some(ts) => ts,
            None if self.0 < 0 => DateTime::<Utc>::MIN_UTC,
            None => DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Add a duration, counted in whole milliseconds
    ///
    /// The duration's sub-millisecond remainder is discarded. Returns
    /// `None` on `i64` overflow.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration.num_milliseconds()).map(Self)
    }

    /// Subtract a duration, counted in whole milliseconds
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.0.checked_sub(duration.num_milliseconds()).map(Self)
    }

    /// Add a duration, saturating at the `i64` bounds
    pub fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.num_milliseconds()))
    }

    /// Subtract a duration, saturating at the `i64` bounds
    pub fn saturating_sub(self, duration: Duration) -> Self {
        Self(self.0.saturating_sub(duration.num_milliseconds()))
    }
}

impl From<Timestamp> for EpochMillis {
    fn from(ts: Timestamp) -> Self {
        Self::from_timestamp(ts)
    }
}

impl From<EpochMillis> for Timestamp {
    fn from(millis: EpochMillis) -> Self {
        millis.to_timestamp()
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

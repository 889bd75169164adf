use thiserror::Error;

use crate::Timestamp;

/// Errors from the explicit mutation operations of adjustable clocks
///
/// The query path (`Clock::now`) is infallible; only misuse of the test
/// doubles' mutation surface is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("duration must not be negative")]
    NegativeDuration,

    #[error("clock is not latched")]
    NotLatched,

    #[error("target instant {target} is earlier than the current instant {current}")]
    RetrogradeAdvance {
        current: Timestamp,
        target: Timestamp,
    },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;

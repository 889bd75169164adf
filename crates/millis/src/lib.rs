//! Kairos Millis
//!
//! The clock capability expressed in a legacy millisecond-resolution
//! representation, plus adapters in both directions.
//!
//! Older APIs and wire formats carry time as a signed count of
//! milliseconds since the Unix epoch. [`EpochMillis`] is that value;
//! [`MillisClock`] is the capability of producing it. Adapters convert
//! between this surface and the nanosecond-precision [`Clock`] capability:
//!
//! ```text
//! Clock (ns Timestamp) --MillisView-----> MillisClock (EpochMillis)
//! MillisClock          --TimestampView--> Clock (whole-ms Timestamp)
//! ```
//!
//! ## Precision rules
//!
//! - Narrowing (`Timestamp` → `EpochMillis`) floors to the containing
//!   millisecond: the sub-millisecond remainder is discarded, rounding
//!   toward negative infinity. It never fails.
//! - Widening (`EpochMillis` → `Timestamp`) is exact; the resulting
//!   timestamp has a zero sub-millisecond field. Values outside chrono's
//!   representable range saturate to `DateTime::<Utc>::MIN_UTC` /
//!   `MAX_UTC`, keeping the query path infallible.
//! - Round-tripping millis → timestamp → millis is lossless for every
//!   in-range value; timestamp → millis → timestamp is the identity for
//!   every whole-millisecond timestamp.

mod clock;
mod epoch;
mod fixed;
mod system;
mod view;

pub use clock::MillisClock;
pub use epoch::EpochMillis;
pub use fixed::FixedMillisClock;
pub use system::SystemMillisClock;
pub use view::{MillisView, TimestampView};

// Re-export the standard capability for convenience
pub use kairos_core::{Clock, Timestamp};

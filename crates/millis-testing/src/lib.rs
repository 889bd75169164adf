//! Kairos Millis Testing
//!
//! Deterministic test doubles for the legacy millisecond clock surface,
//! mirroring the doubles in `kairos-testing`. Time moves only when the
//! test says so.

mod latchable;
mod manual;
mod mutable;
mod supplier;

pub use latchable::LatchableMillisClock;
pub use manual::ManualMillisClock;
pub use mutable::MutableMillisClock;
pub use supplier::SupplierMillisClock;

// Re-export the legacy capability for convenience
pub use kairos_millis::{EpochMillis, MillisClock};

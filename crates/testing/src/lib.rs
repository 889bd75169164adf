//! Kairos Testing
//!
//! Deterministic clock test doubles. None of these ever advance on their
//! own; time moves only when the test says so.
//!
//! - [`ManualClock`]: holds one instant, advanced explicitly
//! - [`LatchableClock`]: free-running until latched to a fixed instant
//! - [`SupplierClock`]: delegates every query to a closure
//!
//! All doubles use interior mutability, so a test can keep a handle for
//! mutation while the code under test holds the same clock behind
//! `Arc<dyn Clock>`. Tests are expected to confine a clock to a single
//! execution context; coordinating concurrent mutation is the consumer's
//! responsibility.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use chrono::Duration;
//! use kairos_core::Clock;
//! use kairos_testing::{ManualClock, MutableClock};
//!
//! let clock = Arc::new(ManualClock::new("2026-01-01T00:00:00Z".parse()?));
//! let under_test = Scheduler::new(clock.clone());
//!
//! clock.bump(Duration::seconds(5))?;
//! assert!(under_test.is_due());
//! ```

mod latchable;
mod manual;
mod mutable;
mod supplier;

pub use latchable::LatchableClock;
pub use manual::ManualClock;
pub use mutable::MutableClock;
pub use supplier::SupplierClock;

// Re-export the core capability for convenience
pub use kairos_core::{Clock, ClockError, ClockResult, Timestamp};

//! Kairos Core
//!
//! The time-source capability and its production implementations.
//!
//! Consumers depend on the [`Clock`] trait, never on a concrete variant,
//! and receive their clock by explicit passing (constructor or function
//! parameter). There is no ambient global clock.
//!
//! ## Variants
//!
//! ```text
//! Clock (capability: now() -> Timestamp)
//!     ├── SystemClock   reads the platform wall clock on every call
//!     ├── FixedClock    always returns one immutable instant
//!     └── OffsetClock   another clock shifted by a constant duration
//! ```
//!
//! Deterministic test doubles (manual, latchable, supplier-backed) live in
//! the `kairos-testing` crate.
//!
//! ## Usage
//!
//! ```ignore
//! use kairos_core::{Clock, SystemClock, OffsetClock};
//! use chrono::Duration;
//!
//! fn stamp_order(clock: &impl Clock) -> kairos_core::Timestamp {
//!     clock.now()
//! }
//!
//! let clock = SystemClock::new();
//! let skewed = OffsetClock::new(SystemClock::new(), Duration::milliseconds(5));
//! let ts = stamp_order(&clock);
//! ```

mod clock;
mod error;
mod fixed;
mod offset;
mod system;

pub use clock::Clock;
pub use error::{ClockError, ClockResult};
pub use fixed::FixedClock;
pub use offset::OffsetClock;
pub use system::SystemClock;

use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

use std::sync::{PoisonError, RwLock};

use chrono::Duration;
use kairos_core::{Clock, ClockError, ClockResult, Timestamp};

use crate::MutableClock;

/// Clock that can be either free-running or latched to some fixed instant
///
/// While unlatched, every reading comes from the delegate. Latching pins
/// the clock to an instant; [`latch_to`](LatchableClock::latch_to) replaces
/// the pinned instant at will, and the `MutableClock` operations advance it.
pub struct LatchableClock<C: Clock> {
    delegate: C,
    fixed: RwLock<Option<Timestamp>>,
}

impl<C: Clock> LatchableClock<C> {
    /// Create an unlatched (free-running) clock
    pub fn new(delegate: C) -> Self {
        Self {
            delegate,
            fixed: RwLock::new(None),
        }
    }

    /// Create a clock already latched to the given instant
    pub fn latched(delegate: C, instant: Timestamp) -> Self {
        Self {
            delegate,
            fixed: RwLock::new(Some(instant)),
        }
    }

    /// Latch to the clock's current reading
    pub fn latch(&self) {
        let instant = self.now();
        self.latch_to(instant);
    }

    /// Latch to an arbitrary instant, replacing any previously pinned one
    pub fn latch_to(&self, instant: Timestamp) {
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        *fixed = Some(instant);
        log::debug!("LatchableClock latched to {instant}");
    }

    /// Resume delegating to the underlying clock
    pub fn unlatch(&self) {
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        *fixed = None;
        log::debug!("LatchableClock unlatched");
    }

    pub fn is_latched(&self) -> bool {
        self.fixed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Get reference to the underlying clock
    pub fn delegate(&self) -> &C {
        &self.delegate
    }
}

impl<C: Clock> Clock for LatchableClock<C> {
    fn now(&self) -> Timestamp {
        let fixed = *self.fixed.read().unwrap_or_else(PoisonError::into_inner);
        fixed.unwrap_or_else(|| self.delegate.now())
    }

    fn name(&self) -> &str {
        "LatchableClock"
    }
}

impl<C: Clock> MutableClock for LatchableClock<C> {
    fn bump(&self, duration: Duration) -> ClockResult<()> {
        if duration < Duration::zero() {
            return Err(ClockError::NegativeDuration);
        }
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        match *fixed {
            Some(instant) => {
                *fixed = Some(instant + duration);
                Ok(())
            }
            None => Err(ClockError::NotLatched),
        }
    }

    fn advance_to(&self, target: Timestamp) -> ClockResult<()> {
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        match *fixed {
            Some(instant) if target < instant => Err(ClockError::RetrogradeAdvance {
                current: instant,
                target,
            }),
            Some(_) => {
                *fixed = Some(target);
                Ok(())
            }
            None => Err(ClockError::NotLatched),
        }
    }
}

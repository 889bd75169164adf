use std::sync::{PoisonError, RwLock};

use chrono::Duration;
use kairos_core::{ClockError, ClockResult};
use kairos_millis::{EpochMillis, MillisClock};

use crate::MutableMillisClock;

/// Legacy clock that can be either free-running or latched to some fixed
/// value
pub struct LatchableMillisClock<M: MillisClock> {
    delegate: M,
    fixed: RwLock<Option<EpochMillis>>,
}

impl<M: MillisClock> LatchableMillisClock<M> {
    /// Create an unlatched (free-running) clock
    pub fn new(delegate: M) -> Self {
        Self {
            delegate,
            fixed: RwLock::new(None),
        }
    }

    /// Create a clock already latched to the given value
    pub fn latched(delegate: M, millis: EpochMillis) -> Self {
        Self {
            delegate,
            fixed: RwLock::new(Some(millis)),
        }
    }

    /// Latch to the clock's current reading
    pub fn latch(&self) {
        let millis = self.now_millis();
        self.latch_to(millis);
    }

    /// Latch to an arbitrary value, replacing any previously pinned one
    pub fn latch_to(&self, millis: EpochMillis) {
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        *fixed = Some(millis);
        log::debug!("LatchableMillisClock latched to {millis}");
    }

    /// Resume delegating to the underlying clock
    pub fn unlatch(&self) {
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        *fixed = None;
        log::debug!("LatchableMillisClock unlatched");
    }

    pub fn is_latched(&self) -> bool {
        self.fixed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<M: MillisClock> MillisClock for LatchableMillisClock<M> {
    fn now_millis(&self) -> EpochMillis {
        let fixed = *self.fixed.read().unwrap_or_else(PoisonError::into_inner);
        fixed.unwrap_or_else(|| self.delegate.now_millis())
    }

    fn name(&self) -> &str {
        "LatchableMillisClock"
    }
}

impl<M: MillisClock> MutableMillisClock for LatchableMillisClock<M> {
    fn bump(&self, duration: Duration) -> ClockResult<()> {
        if duration < Duration::zero() {
            return Err(ClockError::NegativeDuration);
        }
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        match *fixed {
            Some(millis) => {
                *fixed = Some(millis.saturating_add(duration));
                Ok(())
            }
            None => Err(ClockError::NotLatched),
        }
    }

    fn advance_to(&self, target: EpochMillis) -> ClockResult<()> {
        let mut fixed = self.fixed.write().unwrap_or_else(PoisonError::into_inner);
        match *fixed {
            Some(millis) if target < millis => Err(ClockError::RetrogradeAdvance {
                current: millis.to_timestamp(),
                target: target.to_timestamp(),
            }),
            Some(_) => {
                *fixed = Some(target);
                Ok(())
            }
            None => Err(ClockError::NotLatched),
        }
    }
}

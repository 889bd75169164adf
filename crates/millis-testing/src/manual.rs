use std::sync::{PoisonError, RwLock};

use chrono::Duration;
use kairos_core::{ClockError, ClockResult};
use kairos_millis::{EpochMillis, MillisClock};

use crate::MutableMillisClock;

/// Legacy clock that only updates in positive increments when called
/// directly
pub struct ManualMillisClock {
    millis: RwLock<EpochMillis>,
}

impl ManualMillisClock {
    pub fn new(initial: EpochMillis) -> Self {
        Self {
            millis: RwLock::new(initial),
        }
    }

    /// Create a manual clock starting at another clock's current reading
    pub fn initially_at(clock: &impl MillisClock) -> Self {
        Self::new(clock.now_millis())
    }
}

impl MillisClock for ManualMillisClock {
    fn now_millis(&self) -> EpochMillis {
        *self.millis.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn name(&self) -> &str {
        "ManualMillisClock"
    }
}

impl MutableMillisClock for ManualMillisClock {
    fn bump(&self, duration: Duration) -> ClockResult<()> {
        if duration < Duration::zero() {
            return Err(ClockError::NegativeDuration);
        }
        let mut millis = self.millis.write().unwrap_or_else(PoisonError::into_inner);
        *millis = millis.saturating_add(duration);
        log::trace!("ManualMillisClock bumped to {}", *millis);
        Ok(())
    }

    fn advance_to(&self, target: EpochMillis) -> ClockResult<()> {
        let mut millis = self.millis.write().unwrap_or_else(PoisonError::into_inner);
        if target < *millis {
            return Err(ClockError::RetrogradeAdvance {
                current: millis.to_timestamp(),
                target: target.to_timestamp(),
            });
        }
        *millis = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_millis::FixedMillisClock;

    #[test]
    fn returns_initial_value() {
        let clock = ManualMillisClock::new(EpochMillis::new(1_000));
        assert_eq!(clock.now_millis(), EpochMillis::new(1_000));
        assert_eq!(clock.now_millis(), EpochMillis::new(1_000));
    }

    #[test]
    fn starts_at_another_clocks_reading() {
        let source = FixedMillisClock::new(EpochMillis::new(42));
        let clock = ManualMillisClock::initially_at(&source);
        assert_eq!(clock.now_millis(), EpochMillis::new(42));
    }

    #[test]
    fn advances_by_durations_and_conveniences() {
        let clock = ManualMillisClock::new(EpochMillis::UNIX_EPOCH);
        clock.bump(Duration::milliseconds(123)).unwrap();
        clock.bump_millis(77).unwrap();
        clock.bump_seconds(1).unwrap();
        assert_eq!(clock.now_millis(), EpochMillis::new(1_200));
    }

    #[test]
    fn advance_by_zero_is_a_noop() {
        let clock = ManualMillisClock::new(EpochMillis::new(5));
        clock.bump(Duration::zero()).unwrap();
        assert_eq!(clock.now_millis(), EpochMillis::new(5));
    }

    #[test]
    fn refuses_to_advance_by_negative_duration() {
        let clock = ManualMillisClock::new(EpochMillis::new(5));
        assert_eq!(clock.bump_millis(-1), Err(ClockError::NegativeDuration));
        assert_eq!(clock.now_millis(), EpochMillis::new(5));
    }

    #[test]
    fn advances_to_a_later_value_but_not_backwards() {
        let clock = ManualMillisClock::new(EpochMillis::new(1_000));
        clock.advance_to(EpochMillis::new(2_000)).unwrap();
        assert_eq!(clock.now_millis(), EpochMillis::new(2_000));

        assert!(matches!(
            clock.advance_to(EpochMillis::new(1_999)),
            Err(ClockError::RetrogradeAdvance { .. })
        ));
        assert_eq!(clock.now_millis(), EpochMillis::new(2_000));
    }
}

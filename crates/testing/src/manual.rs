use std::sync::{PoisonError, RwLock};

use chrono::Duration;
use kairos_core::{Clock, ClockError, ClockResult, Timestamp};

use crate::MutableClock;

/// Clock that only updates in positive increments when called directly
pub struct ManualClock {
    instant: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            instant: RwLock::new(initial),
        }
    }

    /// Create a manual clock starting at another clock's current reading
    pub fn initially_at(clock: &impl Clock) -> Self {
        Self::new(clock.now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.instant.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

impl MutableClock for ManualClock {
    fn bump(&self, duration: Duration) -> ClockResult<()> {
        if duration < Duration::zero() {
            return Err(ClockError::NegativeDuration);
        }
        let mut instant = self.instant.write().unwrap_or_else(PoisonError::into_inner);
        *instant += duration;
        log::trace!("ManualClock bumped to {}", *instant);
        Ok(())
    }

    fn advance_to(&self, target: Timestamp) -> ClockResult<()> {
        let mut instant = self.instant.write().unwrap_or_else(PoisonError::into_inner);
        if target < *instant {
            return Err(ClockError::RetrogradeAdvance {
                current: *instant,
                target,
            });
        }
        *instant = target;
        log::trace!("ManualClock advanced to {}", *instant);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_core::FixedClock;

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn returns_initial_time() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
    }

    #[test]
    fn starts_at_another_clocks_reading() {
        let source = FixedClock::new(at("2016-08-26T18:30:00Z"));
        let clock = ManualClock::initially_at(&source);
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
    }

    #[test]
    fn advances_by_arbitrary_duration() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        clock
            .bump(Duration::seconds(321) + Duration::milliseconds(123))
            .unwrap();
        assert_eq!(clock.now(), at("2016-08-26T18:35:21.123Z"));
    }

    #[test]
    fn advances_by_millis() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        clock.bump_millis(123).unwrap();
        assert_eq!(clock.now(), at("2016-08-26T18:30:00.123Z"));
    }

    #[test]
    fn advances_by_seconds() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        clock.bump_seconds(123).unwrap();
        assert_eq!(clock.now(), at("2016-08-26T18:32:03Z"));
    }

    #[test]
    fn advance_by_zero_is_a_noop() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        clock.bump(Duration::zero()).unwrap();
        clock.bump_millis(0).unwrap();
        clock.bump_seconds(0).unwrap();
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
    }

    #[test]
    fn refuses_to_advance_by_negative_duration() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        assert_eq!(
            clock.bump(Duration::seconds(-1)),
            Err(ClockError::NegativeDuration)
        );
        assert_eq!(clock.bump_millis(-123), Err(ClockError::NegativeDuration));
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
    }

    #[test]
    fn advances_to_a_later_instant() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        clock.advance_to(at("2016-08-26T19:00:00Z")).unwrap();
        assert_eq!(clock.now(), at("2016-08-26T19:00:00Z"));
    }

    #[test]
    fn advancing_to_the_current_instant_is_a_noop() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        clock.advance_to(at("2016-08-26T18:30:00Z")).unwrap();
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
    }

    #[test]
    fn refuses_to_advance_to_an_earlier_instant() {
        let clock = ManualClock::new(at("2016-08-26T18:30:00Z"));
        assert_eq!(
            clock.advance_to(at("2016-08-26T18:00:00Z")),
            Err(ClockError::RetrogradeAdvance {
                current: at("2016-08-26T18:30:00Z"),
                target: at("2016-08-26T18:00:00Z"),
            })
        );
        assert_eq!(clock.now(), at("2016-08-26T18:30:00Z"));
    }

    #[test]
    fn bump_of_a_shared_clock_is_visible_through_the_capability() {
        use std::sync::Arc;

        let clock = Arc::new(ManualClock::new(at("1970-01-01T00:00:00Z")));
        let shared: Arc<dyn Clock> = clock.clone();

        clock.bump_seconds(5).unwrap();
        assert_eq!(shared.now(), at("1970-01-01T00:00:05Z"));
    }
}

use crate::{Clock, Timestamp};

/// Clock that always returns one immutable instant
///
/// Every query returns exactly the constructed value, unaffected by real
/// elapsed time. For a fixed instant that a test can replace or advance,
/// use the manual or latchable clocks from `kairos-testing`.
///
/// ```
/// use kairos_core::{Clock, FixedClock, Timestamp};
///
/// let epoch: Timestamp = "1970-01-01T00:00:00Z".parse().unwrap();
/// let clock = FixedClock::new(epoch);
/// assert_eq!(clock.now(), epoch);
/// assert_eq!(clock.now(), epoch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// The instant this clock is pinned to
    pub fn instant(&self) -> Timestamp {
        self.instant
    }
}

impl From<Timestamp> for FixedClock {
    fn from(instant: Timestamp) -> Self {
        Self::new(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn every_query_returns_the_constructed_instant() {
        let instant: Timestamp = "2016-08-26T18:30:00Z".parse().unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn converts_from_a_timestamp() {
        let instant: Timestamp = "2016-08-26T18:30:00Z".parse().unwrap();
        let clock = FixedClock::from(instant);
        assert_eq!(clock.instant(), instant);
    }
}

use std::sync::Arc;

use crate::Timestamp;

/// Capability for obtaining the current instant.
///
/// This allows consumers to swap time sources:
/// - Real system time for production
/// - Offset time for skew scenarios
/// - Fixed or manually-advanced time for deterministic tests
///
/// Querying never fails and has no observable side effect beyond reading
/// the underlying source.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

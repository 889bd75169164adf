use std::sync::Arc;

use crate::EpochMillis;

/// Capability for obtaining the current instant in the legacy
/// millisecond-resolution representation
///
/// The millisecond counterpart of [`kairos_core::Clock`]; querying never
/// fails. Consumers that still speak epoch-millis depend on this trait and
/// receive an implementation by explicit passing.
pub trait MillisClock: Send + Sync {
    /// Get the current time according to this clock
    fn now_millis(&self) -> EpochMillis;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "MillisClock"
    }
}

impl<M: MillisClock + ?Sized> MillisClock for &M {
    fn now_millis(&self) -> EpochMillis {
        (**self).now_millis()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: MillisClock + ?Sized> MillisClock for Arc<M> {
    fn now_millis(&self) -> EpochMillis {
        (**self).now_millis()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: MillisClock + ?Sized> MillisClock for Box<M> {
    fn now_millis(&self) -> EpochMillis {
        (**self).now_millis()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

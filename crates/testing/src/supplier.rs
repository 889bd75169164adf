use kairos_core::{Clock, Timestamp};

/// Clock that delegates to a supplier of instants
///
/// Typically the supplier is a closure over state the test already owns:
///
/// ```ignore
/// let now = Arc::new(RwLock::new(start));
/// let clock = SupplierClock::new({
///     let now = now.clone();
///     move || *now.read().unwrap()
/// });
/// ```
pub struct SupplierClock {
    supplier: Box<dyn Fn() -> Timestamp + Send + Sync>,
}

impl SupplierClock {
    pub fn new(supplier: impl Fn() -> Timestamp + Send + Sync + 'static) -> Self {
        Self {
            supplier: Box::new(supplier),
        }
    }
}

impl Clock for SupplierClock {
    fn now(&self) -> Timestamp {
        (self.supplier)()
    }

    fn name(&self) -> &str {
        "SupplierClock"
    }
}

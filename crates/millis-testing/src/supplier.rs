use kairos_millis::{EpochMillis, MillisClock};

/// Legacy clock that delegates to a supplier of values
pub struct SupplierMillisClock {
    supplier: Box<dyn Fn() -> EpochMillis + Send + Sync>,
}

impl SupplierMillisClock {
    pub fn new(supplier: impl Fn() -> EpochMillis + Send + Sync + 'static) -> Self {
        Self {
            supplier: Box::new(supplier),
        }
    }
}

impl MillisClock for SupplierMillisClock {
    fn now_millis(&self) -> EpochMillis {
        (self.supplier)()
    }

    fn name(&self) -> &str {
        "SupplierMillisClock"
    }
}

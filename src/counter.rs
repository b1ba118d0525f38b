/// Plain counter with derived values. State is explicit: callers own the
/// value and mutate it through `increment`, there is no observer wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn double_count(&self) -> u64 {
        self.count.saturating_mul(2)
    }

    pub fn triple_count(&self) -> u64 {
        self.count.saturating_mul(3)
    }
}

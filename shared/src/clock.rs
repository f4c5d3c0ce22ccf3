use std::cell::Cell;
use std::rc::Rc;

/// Millisecond time source the sequencer schedules its transitions against.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Hand-driven clock. Clones share the same instant, so a test can keep one
/// handle while the sequencer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::new(100);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_ms(), 350);
        clock.set(10);
        assert_eq!(handle.now_ms(), 10);
    }
}

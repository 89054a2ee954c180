use std::cell::Cell;
use std::rc::Rc;

/// Monotonic tick counter consumed by timer devices.
///
/// Implementations report the number of ticks elapsed since reset. The counter never moves
/// backwards while timers are armed.
pub trait TickClock {
    fn now_ticks(&self) -> u64;
}

/// Shared, manually-advanced tick clock.
///
/// Clones observe the same underlying counter, so the host main loop can hold one handle and
/// advance it while the timer registry polls another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `ticks`.
    ///
    /// # Panics
    ///
    /// Panics if advancing would overflow `u64`.
    pub fn advance(&self, ticks: u64) {
        let now = self
            .now
            .get()
            .checked_add(ticks)
            .expect("tick clock overflowed u64::MAX");
        self.now.set(now);
    }

    /// Sets the current tick count, intended for host-controlled resets.
    pub fn set_now_ticks(&self, ticks: u64) {
        self.now.set(ticks);
    }
}

impl TickClock for ManualClock {
    fn now_ticks(&self) -> u64 {
        self.now.get()
    }
}

use sylph_time::{Countdown, TickClock};

use crate::error::{Result, TimerError};
use crate::CallbackHandle;

/// Default bound on concurrently armed timers.
///
/// Constrained hosts size the registry ahead of time; exceeding the bound is a reported
/// allocation failure, never a silent eviction.
pub const DEFAULT_TIMER_CAPACITY: usize = 10;

/// One armed timer: its schedule plus the registry's claim on the host callback.
#[derive(Debug)]
pub(crate) struct TimerRecord {
    pub(crate) countdown: Countdown,
    pub(crate) interval_ticks: u64,
    pub(crate) repeat: bool,
    pub(crate) callback: CallbackHandle,
}

/// Unordered collection of armed timers, driven by a shared tick clock.
///
/// The registry owns its records outright; callers only ever hold the opaque [`CallbackHandle`]
/// returned from [`create`](Self::create), which doubles as the cancellation token for
/// [`remove`](Self::remove).
///
/// Handles are **not** deduplicated: two `create` calls with the same handle arm two independent
/// timers with independent schedules, and `remove` then cancels an unspecified one of them.
/// Callers that need deterministic cancellation must keep handles unique.
#[derive(Debug)]
pub struct TimerRegistry<C> {
    pub(crate) clock: C,
    pub(crate) records: Vec<TimerRecord>,
    capacity: usize,
}

impl<C: TickClock> TimerRegistry<C> {
    pub fn new(clock: C) -> Self {
        Self::with_capacity(clock, DEFAULT_TIMER_CAPACITY)
    }

    pub fn with_capacity(clock: C, capacity: usize) -> Self {
        Self {
            clock,
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of armed timers. Never exceeds [`capacity`](Self::capacity).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Arms a new timer that fires `interval_ticks` from the clock's current tick.
    ///
    /// The registry takes its own claim on `callback` and holds it until the record is removed,
    /// either by [`remove`](Self::remove) or by one-shot retirement during
    /// [`process_tick`](Self::process_tick). The returned handle is the caller's cancellation
    /// token.
    ///
    /// Fails without inserting a record or taking a claim if `interval_ticks` is zero or the
    /// registry is full.
    pub fn create(
        &mut self,
        interval_ticks: u64,
        callback: &CallbackHandle,
        repeat: bool,
    ) -> Result<CallbackHandle> {
        if interval_ticks == 0 {
            return Err(TimerError::ZeroInterval);
        }
        if self.records.len() >= self.capacity {
            return Err(TimerError::CapacityExhausted {
                capacity: self.capacity,
            });
        }

        let mut countdown = Countdown::new();
        countdown.arm(self.clock.now_ticks(), interval_ticks);
        self.records.push(TimerRecord {
            countdown,
            interval_ticks,
            repeat,
            callback: callback.clone(),
        });
        Ok(callback.clone())
    }

    /// Cancels one timer whose handle equals `handle`.
    ///
    /// Returns `false` when no record matches. That is a normal miss, not an error: the timer may
    /// be a one-shot that already retired itself, or may have been cancelled twice.
    ///
    /// Cancellation is immediate: once this returns `true` the record is gone and will never
    /// fire, even if its deadline already passed in an unprocessed tick.
    pub fn remove(&mut self, handle: &CallbackHandle) -> bool {
        match self
            .records
            .iter()
            .position(|record| record.callback == *handle)
        {
            Some(index) => {
                // Dropping the record releases the registry's claim on the callback.
                self.records.swap_remove(index);
                true
            }
            None => false,
        }
    }
}

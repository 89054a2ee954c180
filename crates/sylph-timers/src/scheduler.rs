use sylph_time::TickClock;

use crate::registry::TimerRegistry;
use crate::DispatchSink;

impl<C: TickClock> TimerRegistry<C> {
    /// Polls every armed timer once against the current tick count.
    ///
    /// Each expired timer hands a clone of its callback handle to `sink` exactly once, then
    /// either re-arms (repeating) or retires in place (one-shot, releasing its claim exactly as
    /// [`remove`](Self::remove) would). The traversal uses `retain_mut`, so records can disappear
    /// mid-scan without invalidating it.
    ///
    /// Re-arming is relative to the tick being processed, not the missed deadline; repeating
    /// timers drift when ticks are processed late.
    ///
    /// Never blocks and has no failure mode: expiry tests are pure polls, and no record is
    /// allocated here (re-arming mutates the existing record).
    ///
    /// Firing order among timers expiring in the same tick follows the registry's internal order
    /// and is not part of the contract.
    pub fn process_tick(&mut self, sink: &mut dyn DispatchSink) {
        let now = self.clock.now_ticks();
        self.records.retain_mut(|record| {
            if !record.countdown.expired(now) {
                return true;
            }

            sink.enqueue(record.callback.clone());

            if record.repeat {
                record.countdown.arm(now, record.interval_ticks);
                true
            } else {
                false
            }
        });
    }
}

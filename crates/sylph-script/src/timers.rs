use sylph_time::{TickClock, TickRate};
use sylph_timers::{CallbackHandle, DispatchSink, TimerError, TimerRegistry};
use thiserror::Error;

/// Errors surfaced to host-language callers.
#[derive(Debug, Error)]
pub enum BindError {
    /// The requested delay converts to zero ticks and can never fire.
    #[error("invalid timer delay: {ms}ms is below the clock resolution")]
    InvalidDelay { ms: u64 },

    #[error("timer allocation failed: {0}")]
    Alloc(#[from] TimerError),

    /// The identity has no armed timer behind it. Unlike the registry's boolean miss, cancelling
    /// a non-existent timer is an error in the host-facing contract.
    #[error("no armed timer for the given identity")]
    UnknownTimer,
}

#[derive(Debug, Clone, Copy)]
pub struct ScriptTimersConfig {
    /// Tick frequency of the clock backing all timers.
    pub tick_rate: TickRate,
    /// Bound on concurrently armed timers.
    pub capacity: usize,
}

impl Default for ScriptTimersConfig {
    fn default() -> Self {
        Self {
            tick_rate: TickRate::default(),
            capacity: sylph_timers::DEFAULT_TIMER_CAPACITY,
        }
    }
}

/// Host-facing timer entry points.
///
/// Owns the [`TimerRegistry`] for one execution context; the host constructs this once during
/// initialization and drives it from its dispatch loop. The value returned from
/// [`set_interval`](Self::set_interval)/[`set_timeout`](Self::set_timeout) is the identity the
/// host must later pass to [`clear_timer`](Self::clear_timer).
#[derive(Debug)]
pub struct ScriptTimers<C> {
    registry: TimerRegistry<C>,
    tick_rate: TickRate,
}

impl<C: TickClock> ScriptTimers<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, ScriptTimersConfig::default())
    }

    pub fn with_config(clock: C, config: ScriptTimersConfig) -> Self {
        Self {
            registry: TimerRegistry::with_capacity(clock, config.capacity),
            tick_rate: config.tick_rate,
        }
    }

    /// Schedules `callback` to run every `delay_ms` milliseconds until cancelled.
    pub fn set_interval(
        &mut self,
        callback: &CallbackHandle,
        delay_ms: u64,
    ) -> Result<CallbackHandle, BindError> {
        self.arm(callback, delay_ms, true)
    }

    /// Schedules `callback` to run once, `delay_ms` milliseconds from now.
    pub fn set_timeout(
        &mut self,
        callback: &CallbackHandle,
        delay_ms: u64,
    ) -> Result<CallbackHandle, BindError> {
        self.arm(callback, delay_ms, false)
    }

    fn arm(
        &mut self,
        callback: &CallbackHandle,
        delay_ms: u64,
        repeat: bool,
    ) -> Result<CallbackHandle, BindError> {
        let interval_ticks = self.tick_rate.ticks_from_ms(delay_ms);
        if interval_ticks == 0 {
            tracing::warn!(delay_ms, "rejecting timer delay below clock resolution");
            return Err(BindError::InvalidDelay { ms: delay_ms });
        }

        self.registry
            .create(interval_ticks, callback, repeat)
            .map_err(|err| {
                tracing::error!(%err, delay_ms, repeat, "timer allocation failed");
                BindError::from(err)
            })
    }

    /// Cancels the timer behind `id`.
    pub fn clear_timer(&mut self, id: &CallbackHandle) -> Result<(), BindError> {
        if self.registry.remove(id) {
            Ok(())
        } else {
            tracing::warn!("clear request for an unknown timer identity");
            Err(BindError::UnknownTimer)
        }
    }

    /// Polls the registry once; expirations land in `sink` for deferred execution.
    pub fn process_tick(&mut self, sink: &mut dyn DispatchSink) {
        self.registry.process_tick(sink);
    }

    pub fn registry(&self) -> &TimerRegistry<C> {
        &self.registry
    }
}

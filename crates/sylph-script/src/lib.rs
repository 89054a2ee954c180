//! Host-facing timer entry points and deferred callback execution.
//!
//! This crate is the adaptation layer between a scripting host and the timer core:
//!
//! - [`ScriptTimers`] translates host calls (millisecond delays, opaque identities) into
//!   registry operations, converting time units via the platform [`TickRate`](sylph_time::TickRate)
//!   and surfacing every failure to the host caller instead of silently succeeding.
//! - [`CallbackQueue`] is the execution facility expirations are handed to. The scheduler only
//!   enqueues; the host main loop calls [`CallbackQueue::service`] afterwards to actually run
//!   callbacks, keeping callback code off the scheduler's call stack.
//!
//! A typical host main loop:
//!
//! ```
//! use sylph_script::{CallbackQueue, ScriptTimers};
//! use sylph_time::ManualClock;
//! use sylph_timers::CallbackHandle;
//!
//! let clock = ManualClock::new();
//! let mut timers = ScriptTimers::new(clock.clone());
//! let mut queue = CallbackQueue::new();
//!
//! let tick = CallbackHandle::new(|| { /* host callback */ });
//! let id = timers.set_interval(&tick, 20).unwrap();
//!
//! clock.advance(2);
//! timers.process_tick(&mut queue);
//! queue.service();
//!
//! timers.clear_timer(&id).unwrap();
//! ```

#![forbid(unsafe_code)]

mod queue;
mod timers;

pub use queue::CallbackQueue;
pub use timers::{BindError, ScriptTimers, ScriptTimersConfig};

//! Tick-based time primitives for the timer subsystem.
//!
//! All scheduling in this workspace is driven by **platform ticks** (a monotonic counter in
//! platform-defined units) rather than wall-clock time. The host main loop owns time: it advances
//! the clock and polls the timer registry; nothing here ever sleeps or waits.
//!
//! This crate provides:
//! - [`TickClock`], the clock interface timers poll, and [`ManualClock`], a shared
//!   manually-advanced implementation for deterministic tests and hosts that drive time
//!   themselves;
//! - [`Countdown`], an armed deadline with a non-blocking expiry test;
//! - [`TickRate`], the ticks-per-second constant used to convert host time units into ticks.

#![forbid(unsafe_code)]

mod clock;
mod countdown;
mod rate;

pub use clock::{ManualClock, TickClock};
pub use countdown::Countdown;
pub use rate::{TickRate, DEFAULT_TICK_RATE_HZ};

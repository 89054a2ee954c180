//! Timer registry and expiration scheduling.
//!
//! # Design
//!
//! The [`TimerRegistry`] owns every armed timer outright. Callers never hold a record; they hold
//! an opaque [`CallbackHandle`], which both identifies the host callback and serves as the
//! cancellation token for [`TimerRegistry::remove`].
//!
//! Expiration is a per-tick poll: the host main loop calls
//! [`TimerRegistry::process_tick`], which tests every countdown against the shared
//! [`TickClock`](sylph_time::TickClock) and hands each expiration to a [`DispatchSink`]. The sink
//! only records the hand-off; callbacks execute later, from the host's own loop, so callback code
//! can never re-enter the registry mid-scan.
//!
//! The whole subsystem is single-threaded and non-blocking. Records hold reference-counted
//! claims on their callbacks (`Rc` under the hood), which also keeps the registry off any thread
//! boundary by construction.

#![forbid(unsafe_code)]

mod callback;
mod dispatch;
mod error;
mod registry;
mod scheduler;

pub use callback::CallbackHandle;
pub use dispatch::DispatchSink;
pub use error::{Result, TimerError};
pub use registry::{TimerRegistry, DEFAULT_TIMER_CAPACITY};

use sylph_timers::{CallbackHandle, DispatchSink};

/// Deferred callback-execution queue.
///
/// The expiration scheduler enqueues a handle per firing and returns immediately; the host main
/// loop calls [`service`](Self::service) after each poll to run what accumulated. Callbacks
/// therefore never execute inside the scheduler's call frame and are free to create or cancel
/// timers.
#[derive(Debug, Default)]
pub struct CallbackQueue {
    pending: Vec<CallbackHandle>,
}

impl CallbackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next service pass.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Runs every callback queued so far and returns how many ran.
    ///
    /// Only the entries present when `service` is called are run; anything a running callback
    /// enqueues is picked up by the next pass.
    pub fn service(&mut self) -> usize {
        let batch: Vec<CallbackHandle> = self.pending.drain(..).collect();
        for callback in &batch {
            callback.run();
        }
        batch.len()
    }
}

impl DispatchSink for CallbackQueue {
    fn enqueue(&mut self, callback: CallbackHandle) {
        self.pending.push(callback);
    }
}

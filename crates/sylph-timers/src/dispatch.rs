use crate::CallbackHandle;

/// Receives one notification per timer expiration.
///
/// Implementations must only record the hand-off (push onto a queue, bump a counter). The
/// scheduling model requires callbacks to run outside [`process_tick`]'s call frame, so a sink
/// must never execute the callback synchronously.
///
/// [`process_tick`]: crate::TimerRegistry::process_tick
pub trait DispatchSink {
    fn enqueue(&mut self, callback: CallbackHandle);
}

/// Plain collection sink, mostly for tests and instrumentation.
impl DispatchSink for Vec<CallbackHandle> {
    fn enqueue(&mut self, callback: CallbackHandle) {
        self.push(callback);
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimerError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The registry is full. No record was inserted and no claim was taken; the caller may cancel
    /// an existing timer and retry.
    #[error("timer capacity exhausted ({capacity} timers armed)")]
    CapacityExhausted { capacity: usize },

    /// Timers must wait at least one tick before firing.
    #[error("timer interval must be at least one tick")]
    ZeroInterval,
}

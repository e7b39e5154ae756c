//! Cancellable continuations the session hands to the host.
//!
//! A [`Scheduler`] arranges for the session's `frame`/`tick` entry points
//! to be called later; the returned task is the only way to stop that.

/// Handle to pending work. `cancel` must be idempotent and is also a no-op
/// for work that already ran.
pub trait Task {
    fn cancel(&mut self);
}

pub trait Scheduler {
    type Frame: Task;
    type Timer: Task;

    /// Call the session's `frame` once on the next display frame.
    fn request_frame(&mut self) -> crate::error::Result<Self::Frame>;

    /// Call the session's `tick` every `period_ms` until cancelled.
    fn every(&mut self, period_ms: f64) -> crate::error::Result<Self::Timer>;
}

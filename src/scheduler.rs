//! Tick Scheduling
//!
//! The seam between the timer unit and the event loop. A scheduler hands
//! out one repeating once-per-second tick per call; the returned handle
//! cancels that tick when dropped.

/// Source of repeating one-second ticks
pub trait Scheduler {
    /// Cancels the tick when dropped
    type Handle: 'static;

    fn every_second(&self, tick: Box<dyn FnMut()>) -> Self::Handle;
}

#[cfg(test)]
pub use manual::ManualScheduler;

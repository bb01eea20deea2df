//! Interval Scheduler
//!
//! One-second ticks from `setInterval`, via gloo-timers.

use gloo_timers::callback::Interval;

use crate::scheduler::Scheduler;

const TICK_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    /// `clearInterval` runs when the handle is dropped
    type Handle = Interval;

    fn every_second(&self, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(TICK_MS, move || tick())
    }
}

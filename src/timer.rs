//! Countdown Timer
//!
//! `Countdown` is the pure state machine; `TimerUnit` drives it from a
//! `Scheduler` and owns the one tick handle that may exist at a time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --toggle--> Running --toggle--> Idle
//! Running --tick to 0--> Idle
//! any --reset--> Idle (remaining = configured duration)
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::OasisError;
use crate::models::TimerSnapshot;
use crate::scheduler::Scheduler;

pub const DEFAULT_DURATION_MINUTES: u32 = 25;

/// Result of a toggle on the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Now running; ticks must carry this generation
    Started { generation: u64 },
    Stopped,
    /// Nothing left to count down
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Reached zero and stopped
    Finished,
    /// Tick from an earlier activation; ignored
    Stale,
}

/// Remaining-seconds countdown with a configured duration in minutes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u32,
    active: bool,
    duration_minutes: u32,
    /// Bumped on every start and stop so old ticks can be told apart
    generation: u64,
}

impl Countdown {
    /// Idle countdown holding the full duration. Zero minutes becomes one.
    pub fn new(duration_minutes: u32) -> Self {
        let duration_minutes = duration_minutes.max(1);
        Self {
            remaining_secs: duration_minutes.saturating_mul(60),
            active: false,
            duration_minutes,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_secs: self.remaining_secs,
            active: self.active,
            duration_minutes: self.duration_minutes,
        }
    }

    pub fn toggle(&mut self) -> Transition {
        if self.active {
            self.stop();
            Transition::Stopped
        } else if self.remaining_secs == 0 {
            Transition::Unchanged
        } else {
            self.active = true;
            self.generation += 1;
            Transition::Started { generation: self.generation }
        }
    }

    /// Stop and set remaining to `secs`
    pub fn reset_to(&mut self, secs: u32) {
        self.stop();
        self.remaining_secs = secs;
    }

    /// Stop and restore the configured duration
    pub fn reset(&mut self) {
        self.reset_to(self.duration_secs());
    }

    /// Takes effect on the next reset; remaining is untouched.
    pub fn set_duration_minutes(&mut self, minutes: u32) -> Result<(), OasisError> {
        if minutes == 0 {
            return Err(OasisError::InvalidDuration(minutes.to_string()));
        }
        self.duration_minutes = minutes;
        Ok(())
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.active || generation != self.generation {
            return TickOutcome::Stale;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.stop();
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    fn stop(&mut self) {
        self.active = false;
        self.generation += 1;
    }
}

/// Parse the minutes input. Only whole numbers >= 1 are accepted.
pub fn parse_duration_minutes(raw: &str) -> Result<u32, OasisError> {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes >= 1 => Ok(minutes),
        _ => Err(OasisError::InvalidDuration(raw.to_string())),
    }
}

/// Render seconds as `MM:SS`
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

type Listener = Rc<dyn Fn(TimerSnapshot)>;

struct TimerInner<S: Scheduler> {
    countdown: Countdown,
    scheduler: S,
    /// Cancelled on drop
    ticker: Option<S::Handle>,
    listener: Option<Listener>,
}

/// Countdown driven by a scheduler, owning at most one pending tick
pub struct TimerUnit<S: Scheduler> {
    inner: Rc<RefCell<TimerInner<S>>>,
}

impl<S: Scheduler + 'static> TimerUnit<S> {
    pub fn new(scheduler: S, duration_minutes: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TimerInner {
                countdown: Countdown::new(duration_minutes),
                scheduler,
                ticker: None,
                listener: None,
            })),
        }
    }

    /// Called with a fresh snapshot after every state change
    pub fn on_change(&self, listener: impl Fn(TimerSnapshot) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.inner.borrow().countdown.snapshot()
    }

    /// Whether a tick source is currently held
    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.inner.borrow().ticker.is_some()
    }

    /// Start or pause
    pub fn toggle(&self) {
        let transition = self.inner.borrow_mut().countdown.toggle();
        match transition {
            Transition::Started { generation } => {
                self.arm(generation);
                log::debug!("[TIMER] started, {}s left", self.snapshot().remaining_secs);
            }
            Transition::Stopped => {
                self.inner.borrow_mut().ticker = None;
                log::debug!("[TIMER] paused, {}s left", self.snapshot().remaining_secs);
            }
            Transition::Unchanged => return,
        }
        notify(&self.inner);
    }

    /// Stop ticking and restore the configured duration
    pub fn reset(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.ticker = None;
            inner.countdown.reset();
        }
        notify(&self.inner);
    }

    /// Apply the minutes input; invalid input leaves everything unchanged.
    pub fn set_duration(&self, raw: &str) -> Result<(), OasisError> {
        let minutes = parse_duration_minutes(raw)?;
        self.inner.borrow_mut().countdown.set_duration_minutes(minutes)?;
        notify(&self.inner);
        Ok(())
    }

    /// Cancel the tick and stop reporting; used when the view goes away
    pub fn shutdown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.listener = None;
        inner.ticker = None;
        if inner.countdown.is_active() {
            inner.countdown.toggle();
        }
    }

    fn arm(&self, generation: u64) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        // Cancel before scheduling so two ticks never overlap
        inner.ticker = None;
        let handle = inner
            .scheduler
            .every_second(Box::new(move || on_tick(&weak, generation)));
        inner.ticker = Some(handle);
    }
}

fn on_tick<S: Scheduler>(inner: &Weak<RefCell<TimerInner<S>>>, generation: u64) {
    let Some(inner) = inner.upgrade() else { return };
    let (outcome, finished_handle) = {
        let mut guard = inner.borrow_mut();
        let outcome = guard.countdown.tick(generation);
        let handle = match outcome {
            TickOutcome::Finished => guard.ticker.take(),
            TickOutcome::Running | TickOutcome::Stale => None,
        };
        (outcome, handle)
    };
    drop(finished_handle);

    match outcome {
        TickOutcome::Stale => return,
        TickOutcome::Finished => log::info!("[TIMER] finished"),
        TickOutcome::Running => {}
    }
    notify(&inner);
}

fn notify<S: Scheduler>(inner: &Rc<RefCell<TimerInner<S>>>) {
    let (listener, snapshot) = {
        let guard = inner.borrow();
        (guard.listener.clone(), guard.countdown.snapshot())
    };
    if let Some(listener) = listener {
        listener(snapshot);
    }
}

//! Countdowns and the scheduler capability.
//!
//! Phase timers are plain data: a `Countdown` lives inside the phase that
//! owns it and only moves when the engine receives a tick event. Wall-clock
//! scheduling is the host's job, behind the `Scheduler` trait. The session
//! driver starts the host timer when a new countdown run appears and
//! cancels it when the countdown goes away, so at most one timer is active
//! per session.

use serde::{Deserialize, Serialize};

/// A running phase countdown.
///
/// `run` identifies one start of the timer; two countdowns with the same
/// run are the same timer at different moments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub run: u32,
    pub duration: u32,
    pub remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn start(run: u32, duration: u32) -> Self {
        Self {
            run,
            duration,
            remaining: duration,
        }
    }

    /// Advance by `elapsed` seconds. Returns `true` once the countdown has
    /// reached zero.
    pub fn tick(&mut self, elapsed: u32) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_expired()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Share of the duration still left, for progress bars.
    #[must_use]
    pub fn fraction_remaining(&self) -> f32 {
        if self.duration == 0 {
            0.0
        } else {
            self.remaining as f32 / self.duration as f32
        }
    }
}

/// Host capability that delivers one tick per second while a countdown runs.
pub trait Scheduler {
    /// Begin delivering ticks for a countdown of `seconds`.
    ///
    /// Replaces any timer already running.
    fn start(&mut self, seconds: u32);

    /// Stop delivering ticks. Cancelling an idle scheduler is a no-op.
    fn cancel(&mut self);
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn start(&mut self, seconds: u32) {
        (**self).start(seconds);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}

/// Scheduler for sessions without timed phases.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopScheduler;

impl Scheduler for NoopScheduler {
    fn start(&mut self, _seconds: u32) {}

    fn cancel(&mut self) {}
}

/// A call received by a [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerCall {
    Start(u32),
    Cancel,
}

/// Scheduler that records calls; the host (or a test) delivers ticks by hand.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    active: Option<u32>,
    calls: Vec<SchedulerCall>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Duration of the running timer, if any.
    #[must_use]
    pub fn active(&self) -> Option<u32> {
        self.active
    }

    #[must_use]
    pub fn calls(&self) -> &[SchedulerCall] {
        &self.calls
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, seconds: u32) {
        self.active = Some(seconds);
        self.calls.push(SchedulerCall::Start(seconds));
    }

    fn cancel(&mut self) {
        self.active = None;
        self.calls.push(SchedulerCall::Cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_ticks_to_zero() {
        let mut countdown = Countdown::start(1, 3);
        assert!(!countdown.tick(1));
        assert_eq!(countdown.remaining, 2);
        assert!(countdown.tick(5));
        assert_eq!(countdown.remaining, 0);
    }

    #[test]
    fn test_zero_length_countdown_is_expired() {
        let countdown = Countdown::start(1, 0);
        assert!(countdown.is_expired());
        assert_eq!(countdown.fraction_remaining(), 0.0);
    }

    #[test]
    fn test_fraction_remaining() {
        let mut countdown = Countdown::start(1, 180);
        countdown.tick(45);
        assert!((countdown.fraction_remaining() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_manual_scheduler_records_calls() {
        let mut scheduler = ManualScheduler::new();
        scheduler.start(180);
        scheduler.start(42);
        assert_eq!(scheduler.active(), Some(42));

        scheduler.cancel();
        assert_eq!(scheduler.active(), None);
        assert_eq!(
            scheduler.calls(),
            &[SchedulerCall::Start(180), SchedulerCall::Start(42), SchedulerCall::Cancel]
        );
    }
}

//! Countdown timer advanced by wall-clock time

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Where the countdown is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing started since launch
    Idle,
    /// Counting down
    Running,
    /// Reached zero; inert until the next start
    Expired,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or already at zero
    Inert,
    /// Running, but less than a whole second has passed
    Pending,
    /// Time was taken off the countdown
    Advanced { remaining_seconds: u64 },
    /// The countdown crossed zero on this tick
    Expired,
}

impl TickOutcome {
    /// Whether the displayed text has to be redrawn
    pub fn needs_render(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. } | TickOutcome::Expired)
    }
}

/// The single countdown owned by the event loop
#[derive(Debug, Clone)]
pub struct TimerState {
    remaining_seconds: u64,
    running: bool,
    last_tick: DateTime<Utc>,
    phase: Phase,
}

impl TimerState {
    /// Create an idle timer with nothing left to count
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            remaining_seconds: 0,
            running: false,
            last_tick: now,
            phase: Phase::Idle,
        }
    }

    /// Begin a new interval, discarding whatever was in progress
    pub fn start(&mut self, duration_seconds: u64, now: DateTime<Utc>) {
        self.remaining_seconds = duration_seconds;
        self.running = true;
        self.last_tick = now;
        // a zero-length interval never crosses zero, so it never alerts
        self.phase = if duration_seconds > 0 { Phase::Running } else { Phase::Expired };
    }

    /// Advance the countdown by the whole seconds elapsed since the last decrement
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.remaining_seconds == 0 || !self.running {
            return TickOutcome::Inert;
        }

        let elapsed = (now - self.last_tick).num_seconds();
        if elapsed < 1 {
            return TickOutcome::Pending;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(elapsed as u64);
        // only the whole seconds are consumed; the remainder counts toward the next one
        self.last_tick += Duration::seconds(elapsed);

        if self.remaining_seconds == 0 {
            self.running = false;
            self.phase = Phase::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Advanced {
                remaining_seconds: self.remaining_seconds,
            }
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_tick(&self) -> DateTime<Utc> {
        self.last_tick
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(seconds: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(seconds)
    }

    #[test]
    fn new_timer_is_idle_and_inert() {
        let mut timer = TimerState::new(t(0));
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(t(100)), TickOutcome::Inert);
        assert_eq!(timer.last_tick(), t(0));
    }

    #[test]
    fn counts_down_by_elapsed_wall_clock() {
        let mut timer = TimerState::new(t(0));
        timer.start(5, t(0));
        assert_eq!(timer.phase(), Phase::Running);

        assert_eq!(timer.tick(t(3)), TickOutcome::Advanced { remaining_seconds: 2 });
        assert_eq!(timer.last_tick(), t(3));
        assert_eq!(timer.tick(t(13)), TickOutcome::Expired);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.phase(), Phase::Expired);
        assert!(!timer.is_running());
    }

    #[test]
    fn sub_second_ticks_are_pending() {
        let mut timer = TimerState::new(t(0));
        timer.start(10, t(0));
        let half = t(0) + Duration::milliseconds(900);
        assert_eq!(timer.tick(half), TickOutcome::Pending);
        assert_eq!(timer.remaining_seconds(), 10);
        assert_eq!(timer.last_tick(), t(0));
    }

    #[test]
    fn fractional_remainder_carries_to_next_decrement() {
        let mut timer = TimerState::new(t(0));
        timer.start(10, t(0));
        let later = t(1) + Duration::milliseconds(700);
        assert_eq!(timer.tick(later), TickOutcome::Advanced { remaining_seconds: 9 });
        assert_eq!(timer.last_tick(), t(1));
        assert_eq!(timer.tick(t(2)), TickOutcome::Advanced { remaining_seconds: 8 });
    }

    #[test]
    fn tick_jitter_does_not_accumulate() {
        let mut timer = TimerState::new(t(0));
        timer.start(10, t(0));

        let mut expired_at = None;
        for k in 1..=40i64 {
            // half-second cadence with a little scheduling latency
            let latency = if k % 2 == 0 { 500 } else { 2_000 };
            let now = t(0) + Duration::milliseconds(500 * k) + Duration::microseconds(latency);
            if timer.tick(now) == TickOutcome::Expired {
                expired_at = Some((now - t(0)).num_milliseconds());
                break;
            }
        }

        let expired_at = expired_at.expect("interval should expire");
        assert!(expired_at <= 10_500, "10s interval took {}ms", expired_at);
    }

    #[test]
    fn backwards_clock_is_pending() {
        let mut timer = TimerState::new(t(100));
        timer.start(10, t(100));
        assert_eq!(timer.tick(t(50)), TickOutcome::Pending);
        assert_eq!(timer.remaining_seconds(), 10);
    }

    #[test]
    fn expired_timer_ignores_further_ticks() {
        let mut timer = TimerState::new(t(0));
        timer.start(1, t(0));
        assert_eq!(timer.tick(t(1)), TickOutcome::Expired);
        for s in 2..10 {
            assert_eq!(timer.tick(t(s)), TickOutcome::Inert);
        }
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn restart_discards_previous_interval() {
        let mut timer = TimerState::new(t(0));
        timer.start(5, t(0));
        assert!(timer.tick(t(4)).needs_render());
        timer.start(60, t(4));
        assert_eq!(timer.remaining_seconds(), 60);
        assert_eq!(timer.tick(t(5)), TickOutcome::Advanced { remaining_seconds: 59 });
    }

    #[test]
    fn zero_length_interval_never_expires_through_a_tick() {
        let mut timer = TimerState::new(t(0));
        timer.start(0, t(0));
        assert!(timer.is_running());
        assert_eq!(timer.phase(), Phase::Expired);
        assert_eq!(timer.tick(t(5)), TickOutcome::Inert);
    }

    #[test]
    fn remaining_never_increases_while_running() {
        let mut timer = TimerState::new(t(0));
        timer.start(30, t(0));
        let mut previous = timer.remaining_seconds();
        for step in [0, 1, 1, 2, 2, 7, 7, 8, 20, 31, 40] {
            timer.tick(t(step));
            assert!(timer.remaining_seconds() <= previous);
            previous = timer.remaining_seconds();
        }
        assert_eq!(previous, 0);
    }
}

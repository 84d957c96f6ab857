//! Main application state management

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    display::{Screen, Template},
    sound::Alert,
    status::{format_uptime, StatusReport},
    utils::{Clock, SystemClock},
};
use super::{Phase, Presets, TickOutcome, TimerState, Trigger};

/// Application state owned by the event loop: the timer plus everything
/// needed to start, draw and report it
#[derive(Debug)]
pub struct AppState<C: Clock = SystemClock> {
    timer: TimerState,
    presets: Presets,
    template: Template,
    clock: C,
    start_time: DateTime<Utc>,
    last_action: Option<Trigger>,
    last_action_time: Option<DateTime<Utc>>,
    completed_intervals: u64,
}

impl AppState<SystemClock> {
    pub fn new(presets: Presets, template: Template) -> Self {
        Self::with_clock(presets, template, SystemClock)
    }
}

impl<C: Clock> AppState<C> {
    pub fn with_clock(presets: Presets, template: Template, clock: C) -> Self {
        let now = clock.now();
        Self {
            timer: TimerState::new(now),
            presets,
            template,
            clock,
            start_time: now,
            last_action: None,
            last_action_time: None,
            completed_intervals: 0,
        }
    }

    /// Start an interval of the given length and draw it immediately
    pub fn start(&mut self, duration_seconds: u64, screen: &mut impl Screen) {
        let now = self.clock.now();
        if self.timer.phase() == Phase::Running {
            debug!(
                "Discarding running interval with {}s left",
                self.timer.remaining_seconds()
            );
        }
        self.timer.start(duration_seconds, now);
        screen.set_text(&self.display_text());
    }

    /// Start the preset interval bound to a trigger
    pub fn trigger(&mut self, trigger: Trigger, screen: &mut impl Screen) {
        let duration = self.presets.duration_for(trigger);
        info!("Starting {} interval of {}s", trigger, duration);

        self.start(duration, screen);
        self.last_action = Some(trigger);
        self.last_action_time = Some(self.clock.now());
    }

    /// Advance the countdown; redraw when it moved and alert when it hit zero
    pub fn tick(&mut self, screen: &mut impl Screen, alert: &mut impl Alert) -> TickOutcome {
        let outcome = self.timer.tick(self.clock.now());

        if outcome == TickOutcome::Expired {
            self.completed_intervals += 1;
            info!("Interval finished, playing notification");
            alert.play();
        }
        if outcome.needs_render() {
            screen.set_text(&self.display_text());
        }

        outcome
    }

    /// The remaining time formatted with the display template
    pub fn display_text(&self) -> String {
        self.template.render(self.timer.remaining_seconds())
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn presets(&self) -> Presets {
        self.presets
    }

    pub fn completed_intervals(&self) -> u64 {
        self.completed_intervals
    }

    /// Time since launch as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = (self.clock.now() - self.start_time).num_seconds().max(0);
        format_uptime(elapsed as u64)
    }

    pub fn last_action(&self) -> (Option<Trigger>, Option<DateTime<Utc>>) {
        (self.last_action, self.last_action_time)
    }

    /// Snapshot the current state for the status command
    pub fn status(&self) -> StatusReport {
        StatusReport {
            phase: self.timer.phase(),
            running: self.timer.is_running(),
            remaining_seconds: self.timer.remaining_seconds(),
            display: self.display_text(),
            work_seconds: self.presets.work_seconds,
            break_seconds: self.presets.break_seconds,
            completed_intervals: self.completed_intervals,
            uptime: self.uptime(),
            last_action: self.last_action,
            last_action_time: self.last_action_time,
            timestamp: self.clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;

    #[derive(Default)]
    struct Recorder {
        texts: Vec<String>,
    }

    impl Screen for Recorder {
        fn set_text(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }
    }

    #[derive(Default)]
    struct Bell {
        plays: usize,
    }

    impl Alert for Bell {
        fn play(&mut self) {
            self.plays += 1;
        }
    }

    fn app(clock: &ManualClock) -> AppState<ManualClock> {
        AppState::with_clock(Presets::default(), Template::default(), clock.clone())
    }

    #[test]
    fn start_draws_the_full_duration() {
        let clock = ManualClock::default();
        let mut state = app(&clock);
        let mut screen = Recorder::default();

        state.start(90, &mut screen);
        assert_eq!(screen.texts, vec!["1:30"]);
        assert_eq!(state.timer().phase(), Phase::Running);
    }

    #[test]
    fn trigger_uses_preset_and_records_action() {
        let clock = ManualClock::default();
        let mut state = app(&clock);
        let mut screen = Recorder::default();

        clock.advance_secs(10);
        state.trigger(Trigger::Break, &mut screen);

        assert_eq!(state.timer().remaining_seconds(), 300);
        assert_eq!(screen.texts, vec!["5:00"]);
        let (action, when) = state.last_action();
        assert_eq!(action, Some(Trigger::Break));
        assert_eq!(when, Some(clock.now()));
    }

    #[test]
    fn tick_redraws_only_when_time_moves() {
        let clock = ManualClock::default();
        let mut state = app(&clock);
        let mut screen = Recorder::default();
        let mut bell = Bell::default();

        state.start(5, &mut screen);
        assert_eq!(state.tick(&mut screen, &mut bell), TickOutcome::Pending);
        clock.advance_secs(3);
        assert_eq!(
            state.tick(&mut screen, &mut bell),
            TickOutcome::Advanced { remaining_seconds: 2 }
        );
        assert_eq!(screen.texts, vec!["0:05", "0:02"]);
        assert_eq!(bell.plays, 0);
    }

    #[test]
    fn expiry_alerts_once_and_counts_interval() {
        let clock = ManualClock::default();
        let mut state = app(&clock);
        let mut screen = Recorder::default();
        let mut bell = Bell::default();

        state.start(5, &mut screen);
        clock.advance_secs(10);
        assert_eq!(state.tick(&mut screen, &mut bell), TickOutcome::Expired);
        clock.advance_secs(10);
        assert_eq!(state.tick(&mut screen, &mut bell), TickOutcome::Inert);

        assert_eq!(bell.plays, 1);
        assert_eq!(state.completed_intervals(), 1);
        assert_eq!(screen.texts, vec!["0:05", "0:00"]);
    }

    #[test]
    fn status_reflects_state() {
        let clock = ManualClock::default();
        let mut state = app(&clock);
        let mut screen = Recorder::default();

        state.trigger(Trigger::Work, &mut screen);
        clock.advance_secs(65);
        let report = state.status();

        assert_eq!(report.phase, Phase::Running);
        assert_eq!(report.remaining_seconds, 1500);
        assert_eq!(report.display, "25:00");
        assert_eq!(report.uptime, "1m 5s");
        assert_eq!(report.last_action, Some(Trigger::Work));
        assert_eq!(report.timestamp, clock.now());
    }
}

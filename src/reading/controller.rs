//! Playback controller: the reading session plus the one timer that advances
//! it.
//!
//! Every command leaves the timer in step with the session. The timer runs
//! exactly while the session is playing and has tokens; it is re-armed when
//! the rate changes mid-playback and cancelled before any command that leaves
//! the playing state returns.

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::PlaybackConfig;
use crate::reading::clock::{Clock, SystemClock};
use crate::reading::state::{PlaybackState, ReadingState, TickOutcome};
use crate::reading::timer::RepeatingTimer;
use crate::reading::timing::tick_interval;

/// Read-only view of the session for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Token at the reading position, or the placeholder when there are none
    pub current_token: &'a str,
    /// 1-based position
    pub position: usize,
    pub total: usize,
    pub playback: PlaybackState,
    pub wpm: u32,
}

impl Snapshot<'_> {
    /// `"position / total"`, e.g. `"3 / 3"`.
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

pub struct PlaybackController<C: Clock = SystemClock> {
    state: ReadingState,
    timer: RepeatingTimer,
    clock: C,
}

impl PlaybackController<SystemClock> {
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> PlaybackController<C> {
    pub fn with_clock(config: PlaybackConfig, clock: C) -> Self {
        Self {
            state: ReadingState::new(config),
            timer: RepeatingTimer::new(),
            clock,
        }
    }

    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn load_text(&mut self, raw: &str) {
        self.state.load(raw);
        self.sync_timer();
        debug!(tokens = self.state.tokens().len(), "text loaded");
    }

    pub fn new_session(&mut self) {
        self.state.clear();
        self.sync_timer();
        debug!("new session");
    }

    /// Flips between playing and paused. Playing an empty session is allowed
    /// and inert: no timer is armed until there is something to advance.
    pub fn toggle_play(&mut self) {
        self.state.toggle();
        self.sync_timer();
        debug!(playback = ?self.state.playback(), "toggled playback");
    }

    pub fn restart(&mut self) {
        self.state.rewind_and_play();
        self.sync_timer();
        debug!("restarted");
    }

    pub fn adjust_rate(&mut self, delta: i32) {
        let before = self.state.wpm();
        self.state.adjust_wpm(delta);
        let after = self.state.wpm();

        if after != before && self.timer.is_armed() {
            self.arm_timer();
        }
        debug!(delta, wpm = after, "rate adjusted");
    }

    /// Applies one beat of playback. Called by the scheduler through
    /// [`poll_timer`](Self::poll_timer), or directly.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.state.step();
        if outcome == TickOutcome::Finished {
            debug!(position = self.state.current_index(), "reached end of text");
        }
        self.sync_timer();
        outcome
    }

    /// Fires the timer if its deadline has passed and applies the tick.
    pub fn poll_timer(&mut self) -> TickOutcome {
        if self.timer.fire(self.clock.now()) {
            self.tick()
        } else {
            TickOutcome::Idle
        }
    }

    /// When the armed timer next fires, if it is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let current_token = self
            .state
            .current_token()
            .map(|t| t.text())
            .unwrap_or(self.state.config().placeholder.as_str());

        Snapshot {
            current_token,
            position: self.state.current_index() + 1,
            total: self.state.tokens().len(),
            playback: self.state.playback(),
            wpm: self.state.wpm(),
        }
    }

    fn should_run(&self) -> bool {
        self.state.is_playing() && !self.state.tokens().is_empty()
    }

    fn sync_timer(&mut self) {
        match (self.should_run(), self.timer.is_armed()) {
            (true, false) => self.arm_timer(),
            (false, true) => {
                self.timer.cancel();
                trace!("timer cancelled");
            }
            _ => {}
        }
    }

    fn arm_timer(&mut self) {
        let period = tick_interval(self.state.wpm());
        self.timer.arm(period, self.clock.now());
        trace!(?period, "timer armed");
    }
}

// Configuration for the glimpse reader and its terminal front end.
// Defaults mirror the reading aid's documented behavior.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Playback configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Words per minute when a session starts (default 350)
    pub initial_wpm: u32,

    /// Minimum and maximum allowed WPM
    pub wpm_range: RangeInclusive<u32>,

    /// Amount a single rate+/rate- command moves the WPM (default 50)
    pub wpm_step: u32,

    /// Shown in place of a token when there is nothing to read
    pub placeholder: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_wpm: 350,
            wpm_range: 50..=1000,
            wpm_step: 50,
            placeholder: "···".to_string(),
        }
    }
}

impl PlaybackConfig {
    /// Overrides the starting rate, rounded to the nearest multiple of
    /// `wpm_step` (halves round up) and clamped into `wpm_range`.
    pub fn with_initial_wpm(mut self, wpm: u32) -> Self {
        self.initial_wpm = self.clamp_wpm(self.snap_wpm(wpm));
        self
    }

    fn snap_wpm(&self, wpm: u32) -> i64 {
        let step = i64::from(self.wpm_step.max(1));
        (i64::from(wpm) + step / 2) / step * step
    }

    pub fn clamp_wpm(&self, wpm: i64) -> u32 {
        let min = i64::from(*self.wpm_range.start());
        let max = i64::from(*self.wpm_range.end());
        // the range bounds are u32, so the clamped value always fits
        wpm.clamp(min, max) as u32
    }

    pub fn step_delta(&self) -> i32 {
        i32::try_from(self.wpm_step).unwrap_or(i32::MAX)
    }
}

/// Terminal front end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// How long the event loop waits for input when no timer is armed
    pub idle_poll: Duration,

    /// Width in cells of the progress bar under the counter
    pub progress_bar_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            idle_poll: Duration::from_millis(250),
            progress_bar_width: 30,
        }
    }
}

/// Master configuration combining all glimpse settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub ui: UiConfig,
}

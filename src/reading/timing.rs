// Timing - WPM to tick interval conversion

use std::time::Duration;

/// Period of the playback timer at `wpm` (`60000 / wpm` ms).
///
/// Computed in microseconds so rates that do not divide 60000 evenly keep
/// their sub-millisecond remainder.
pub fn tick_interval(wpm: u32) -> Duration {
    Duration::from_micros(60_000_000 / u64::from(wpm.max(1)))
}

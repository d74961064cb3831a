//! Progress and timing affordances used while walking a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default marker interval: every 5th schema gets a star in the log.
pub const MARKER_INTERVAL: usize = 5;

/// Human-readable elapsed time, e.g. `1 hr 1 min 1 sec` for 3661 seconds.
///
/// Hours are uncapped; a 30-hour run reports `30 hr`, not a wrapped clock.
pub fn elapsed_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours} hr {minutes} min {secs} sec")
}

/// Visual marker for the item at zero-based index `count` within a range
/// starting at `range_start`: `"*"` on every `interval`th item, otherwise a
/// single blank. Purely a log affordance.
pub fn incremental_marker(count: usize, interval: usize, range_start: usize) -> &'static str {
    let position = count as i64 + 1 - range_start as i64;
    if position.rem_euclid(interval as i64) == 0 {
        "*"
    } else {
        " "
    }
}

/// Cooperative cancellation flag, honored at schema boundaries.
///
/// Cloning shares the flag; any clone can cancel the run.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

use crate::services::storage::KeyValueStore;

use super::models::{time_left, TimeLeftBreakdown};

/// Storage key for the countdown target, stored as base-10 epoch ms.
pub const TARGET_KEY: &str = "countdown-target";

/// Owns the countdown target for one application run and publishes the
/// latest [`TimeLeftBreakdown`].
///
/// The controller is a passive state machine: the frame loop calls
/// [`CountdownController::tick`] with the current instant at a one-second
/// cadence, and tests drive it with synthetic instants. Once the remaining
/// time reaches zero, ticking stops for good and the breakdown stays
/// all-zero.
pub struct CountdownController {
    target_ms: i64,
    time_left: TimeLeftBreakdown,
    finished: bool,
}

impl CountdownController {
    /// Resolve the target from storage and publish the first breakdown.
    ///
    /// A stored value is honored only if it parses as an integer strictly
    /// after `now_ms`. Anything else (absent, malformed, elapsed) is
    /// replaced with `now_ms + duration_ms`, persisted exactly once.
    pub fn activate(store: &mut dyn KeyValueStore, now_ms: i64, duration_ms: i64) -> Self {
        let target_ms = match Self::load_target(&*store, now_ms) {
            Some(target_ms) => target_ms,
            None => {
                let fresh = now_ms + duration_ms;
                store.set(TARGET_KEY, &fresh.to_string());
                log::info!("countdown target reset to epoch ms {fresh}");
                fresh
            }
        };

        let time_left = time_left(target_ms, now_ms);
        let finished = time_left.is_zero();

        Self {
            target_ms,
            time_left,
            finished,
        }
    }

    fn load_target(store: &dyn KeyValueStore, now_ms: i64) -> Option<i64> {
        let raw = store.get(TARGET_KEY)?;
        match raw.trim().parse::<i64>() {
            Ok(target_ms) if target_ms > now_ms => Some(target_ms),
            Ok(_) => {
                log::info!("stored countdown target already elapsed");
                None
            }
            Err(_) => {
                log::warn!("stored countdown target is not a number: {raw:?}");
                None
            }
        }
    }

    /// Recompute the breakdown for the current instant. A no-op once the
    /// countdown has finished.
    pub fn tick(&mut self, now_ms: i64) {
        if self.finished {
            return;
        }

        self.time_left = time_left(self.target_ms, now_ms);
        if self.time_left.is_zero() {
            self.finished = true;
        }
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    pub fn time_left(&self) -> TimeLeftBreakdown {
        self.time_left
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

//! Shift-click gesture recognizer behind the hidden easter egg.
//!
//! The detector keeps a rolling window of recent qualifying clicks and
//! reveals the easter egg the instant the threshold is met inside the
//! trailing window. The UI layer decides what a qualifying click is
//! (primary button + shift) and feeds only those in.

use crate::models::settings::GestureSettings;

/// Rolling-window click recognizer with a single armed hide deadline.
///
/// Like the countdown controller this is a passive state machine: the frame
/// loop calls [`ClickGestureDetector::tick`] with the current instant, and
/// tests drive it with synthetic timestamps.
pub struct ClickGestureDetector {
    threshold: usize,
    window_ms: i64,
    hide_ms: i64,
    clicks: Vec<i64>,
    revealed: bool,
    hide_at: Option<i64>,
}

impl ClickGestureDetector {
    pub fn new(settings: &GestureSettings) -> Self {
        Self {
            threshold: settings.threshold.max(1),
            window_ms: settings.window_ms,
            hide_ms: settings.hide_ms,
            clicks: Vec::new(),
            revealed: false,
            hide_at: None,
        }
    }

    /// Register one qualifying click at `now_ms`. Returns true when this
    /// click completes the gesture and the reveal fires.
    ///
    /// The window is pruned to the trailing span before the click is
    /// appended, and cleared entirely on reveal so a consumed gesture
    /// cannot re-trigger on stale clicks. Re-arming replaces any pending
    /// hide deadline, so only one is ever armed.
    pub fn record_click(&mut self, now_ms: i64) -> bool {
        self.clicks.retain(|&t| now_ms - t <= self.window_ms);
        self.clicks.push(now_ms);

        if self.clicks.len() < self.threshold {
            return false;
        }

        self.clicks.clear();
        self.revealed = true;
        self.hide_at = Some(now_ms + self.hide_ms);
        log::debug!("click gesture completed, revealing easter egg");
        true
    }

    /// Auto-hide once the armed deadline elapses.
    pub fn tick(&mut self, now_ms: i64) {
        if let Some(hide_at) = self.hide_at {
            if now_ms >= hide_at {
                self.hide_at = None;
                self.revealed = false;
            }
        }
    }

    /// Explicit user dismissal. The pending deadline stays armed; expiring
    /// against an already-hidden state is harmless.
    pub fn dismiss(&mut self) {
        self.revealed = false;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Instant at which the current reveal will auto-hide, if one is armed.
    pub fn hide_deadline(&self) -> Option<i64> {
        self.hide_at
    }

    pub fn pending_clicks(&self) -> usize {
        self.clicks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> ClickGestureDetector {
        ClickGestureDetector::new(&GestureSettings::default())
    }

    #[test]
    fn five_rapid_clicks_reveal_exactly_once_on_the_fifth() {
        let mut d = detector();
        let mut fired = Vec::new();
        for t in [0, 500, 1_000, 1_500, 2_000] {
            fired.push(d.record_click(t));
        }
        assert_eq!(fired, vec![false, false, false, false, true]);
        assert!(d.is_revealed());
    }

    #[test]
    fn four_clicks_never_reveal() {
        let mut d = detector();
        for t in [0, 500, 1_000, 1_500] {
            assert!(!d.record_click(t));
        }
        assert!(!d.is_revealed());
    }

    #[test]
    fn clicks_outside_the_trailing_window_do_not_count() {
        let mut d = detector();
        // First click ages out of the 3000ms window by the time of the fifth.
        for t in [0, 1_000, 2_000, 3_000, 3_500] {
            d.record_click(t);
        }
        assert!(!d.is_revealed());
        // The four surviving clicks are still in the window.
        assert_eq!(d.pending_clicks(), 4);
    }

    #[test]
    fn window_is_cleared_when_reveal_fires() {
        let mut d = detector();
        for t in [0, 100, 200, 300, 400] {
            d.record_click(t);
        }
        assert!(d.is_revealed());

        // An immediate sixth click starts counting from one.
        assert!(!d.record_click(450));
        assert_eq!(d.pending_clicks(), 1);
    }

    #[test]
    fn reveal_auto_hides_after_the_hide_duration() {
        let mut d = detector();
        for t in [0, 100, 200, 300, 400] {
            d.record_click(t);
        }

        d.tick(400 + 5_999);
        assert!(d.is_revealed());

        d.tick(400 + 6_000);
        assert!(!d.is_revealed());
        assert_eq!(d.hide_deadline(), None);
    }

    #[test]
    fn new_reveal_replaces_the_pending_hide_deadline() {
        let mut d = detector();
        for t in [0, 100, 200, 300, 400] {
            d.record_click(t);
        }
        assert_eq!(d.hide_deadline(), Some(6_400));

        for t in [1_000, 1_100, 1_200, 1_300, 1_400] {
            d.record_click(t);
        }
        assert_eq!(d.hide_deadline(), Some(7_400));

        // The original deadline no longer hides anything.
        d.tick(6_400);
        assert!(d.is_revealed());
        d.tick(7_400);
        assert!(!d.is_revealed());
    }

    #[test]
    fn dismiss_hides_immediately_without_disarming_the_deadline() {
        let mut d = detector();
        for t in [0, 100, 200, 300, 400] {
            d.record_click(t);
        }

        d.dismiss();
        assert!(!d.is_revealed());
        assert!(d.hide_deadline().is_some());

        // The stale deadline fires against an already-hidden state.
        d.tick(10_000);
        assert!(!d.is_revealed());
        assert_eq!(d.hide_deadline(), None);
    }
}

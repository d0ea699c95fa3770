//! Tunable application settings with reference defaults.

use serde::Deserialize;

/// Countdown duration applied whenever a fresh target is generated.
pub const DEFAULT_COUNTDOWN_HOURS: i64 = 120;

/// Clicks required inside the trailing window to reveal the easter egg.
pub const DEFAULT_GESTURE_THRESHOLD: usize = 5;

/// Trailing window for gesture clicks, in milliseconds.
pub const DEFAULT_GESTURE_WINDOW_MS: i64 = 3_000;

/// How long the easter egg stays visible before auto-hiding.
pub const DEFAULT_REVEAL_HIDE_MS: i64 = 6_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub countdown_hours: i64,
    pub gesture: GestureSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub threshold: usize,
    pub window_ms: i64,
    pub hide_ms: i64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            countdown_hours: DEFAULT_COUNTDOWN_HOURS,
            gesture: GestureSettings::default(),
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GESTURE_THRESHOLD,
            window_ms: DEFAULT_GESTURE_WINDOW_MS,
            hide_ms: DEFAULT_REVEAL_HIDE_MS,
        }
    }
}

impl AppSettings {
    pub fn countdown_duration_ms(&self) -> i64 {
        self.countdown_hours * 3_600 * 1_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_is_120_hours_in_ms() {
        let settings = AppSettings::default();
        assert_eq!(settings.countdown_duration_ms(), 432_000_000);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let settings: AppSettings = toml::from_str("countdown_hours = 48").unwrap();
        assert_eq!(settings.countdown_hours, 48);
        assert_eq!(settings.gesture, GestureSettings::default());
    }
}

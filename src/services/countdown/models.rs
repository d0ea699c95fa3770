/// Remaining time to a target instant, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeftBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeftBreakdown {
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Decompose `target_ms - now_ms` into days/hours/minutes/seconds using
/// integer truncation at each level. A target at or before `now_ms` yields
/// all zeros. Pure; both instants are epoch milliseconds.
pub fn time_left(target_ms: i64, now_ms: i64) -> TimeLeftBreakdown {
    let diff = (target_ms - now_ms).max(0);
    let total_seconds = diff / 1_000;

    TimeLeftBreakdown {
        days: total_seconds / 86_400,
        hours: (total_seconds % 86_400) / 3_600,
        minutes: (total_seconds % 3_600) / 60,
        seconds: total_seconds % 60,
    }
}

// Property-based tests for the time-left calculator
use proptest::prelude::*;

use sprint_snapshot::services::countdown::{time_left, TimeLeftBreakdown};

// Epoch-ms instants up to the year 2100, futures up to ~400 days out.
const MAX_NOW_MS: i64 = 4_102_444_800_000;
const MAX_DELTA_MS: i64 = 400 * 86_400_000;

proptest! {
    /// The breakdown reassembles to the floored whole-second difference,
    /// with every field inside its unit range.
    #[test]
    fn breakdown_reassembles_to_floored_seconds(
        now in 0i64..MAX_NOW_MS,
        delta in 1i64..MAX_DELTA_MS,
    ) {
        let target = now + delta;
        let t = time_left(target, now);

        prop_assert!(t.days >= 0);
        prop_assert!((0..24).contains(&t.hours));
        prop_assert!((0..60).contains(&t.minutes));
        prop_assert!((0..60).contains(&t.seconds));

        let reassembled = t.days * 86_400 + t.hours * 3_600 + t.minutes * 60 + t.seconds;
        prop_assert_eq!(reassembled, (target - now) / 1_000);
    }

    /// Any target at or before now collapses to all zeros.
    #[test]
    fn elapsed_targets_are_all_zero(
        now in 0i64..MAX_NOW_MS,
        back in 0i64..MAX_DELTA_MS,
    ) {
        prop_assert_eq!(time_left(now - back, now), TimeLeftBreakdown::default());
    }

    /// Moving `now` forward never increases any remaining-time field total.
    #[test]
    fn remaining_time_is_monotonic_in_now(
        now in 0i64..MAX_NOW_MS,
        delta in 1i64..MAX_DELTA_MS,
        step in 0i64..86_400_000i64,
    ) {
        let target = now + delta;
        let before = time_left(target, now);
        let after = time_left(target, now + step);

        let total = |t: TimeLeftBreakdown| t.days * 86_400 + t.hours * 3_600 + t.minutes * 60 + t.seconds;
        prop_assert!(total(after) <= total(before));
    }
}

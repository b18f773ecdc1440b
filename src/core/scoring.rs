//! Scoring module - line-clear points, level curve, and gravity speed
//!
//! All functions are pure. The level is always recomputed from the cumulative
//! line count rather than incremented, so it can never drift out of sync with
//! the lines that produced it.

use crate::types::{BASE_DROP_MS, DROP_FLOOR_MS, LINE_SCORES};

/// Points for clearing `lines` rows at once at the given level.
///
/// lines: number of rows cleared simultaneously (0-4; 4 is the geometric
/// maximum from one placement)
/// level: level in effect when the clear happened (0-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines > 4 {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Level for a cumulative cleared-line count.
///
/// Level-ups come every 5 lines up to level 10, every 8 lines up to level 20,
/// and every 10 lines beyond that.
pub fn level_for_lines(total_lines: u32) -> u32 {
    if total_lines < 50 {
        total_lines / 5
    } else if total_lines < 130 {
        10 + (total_lines - 50) / 8
    } else {
        20 + (total_lines - 130) / 10
    }
}

/// Milliseconds between automatic drops at the given level.
///
/// Starts at 800ms, loses 80ms per level through 10, 40ms per level through
/// 20, then 20ms per level, never going below the 40ms floor.
pub fn drop_interval_ms(level: u32) -> u64 {
    let level = level as u64;
    if level == 0 {
        BASE_DROP_MS
    } else if level <= 10 {
        (BASE_DROP_MS - level * 80).max(120)
    } else if level <= 20 {
        120u64.saturating_sub((level - 10) * 40).max(80)
    } else {
        80u64.saturating_sub((level - 20) * 20).max(DROP_FLOOR_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        // Level 0
        assert_eq!(line_clear_score(0, 0), 0);
        assert_eq!(line_clear_score(1, 0), 40);
        assert_eq!(line_clear_score(2, 0), 100);
        assert_eq!(line_clear_score(3, 0), 300);
        assert_eq!(line_clear_score(4, 0), 1200);

        // Level multiplier is (level + 1)
        assert_eq!(line_clear_score(4, 5), 7200);
        assert_eq!(line_clear_score(1, 9), 400);
    }

    #[test]
    fn test_zero_lines_scores_zero_at_any_level() {
        for level in [0, 1, 10, 20, 100] {
            assert_eq!(line_clear_score(0, level), 0);
        }
    }

    #[test]
    fn test_level_curve_breakpoints() {
        assert_eq!(level_for_lines(0), 0);
        assert_eq!(level_for_lines(4), 0);
        assert_eq!(level_for_lines(5), 1);
        assert_eq!(level_for_lines(49), 9);
        assert_eq!(level_for_lines(50), 10);
        assert_eq!(level_for_lines(57), 10);
        assert_eq!(level_for_lines(58), 11);
        assert_eq!(level_for_lines(129), 19);
        assert_eq!(level_for_lines(130), 20);
        assert_eq!(level_for_lines(140), 21);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut previous = 0;
        for lines in 0..500 {
            let level = level_for_lines(lines);
            assert!(level >= previous, "level dropped at {} lines", lines);
            previous = level;
        }
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(0), 800);
        assert_eq!(drop_interval_ms(1), 720);
        assert_eq!(drop_interval_ms(5), 400);
        assert_eq!(drop_interval_ms(9), 120);
        assert_eq!(drop_interval_ms(10), 120);
        assert_eq!(drop_interval_ms(11), 80);
        assert_eq!(drop_interval_ms(20), 80);
        assert_eq!(drop_interval_ms(21), 60);
        assert_eq!(drop_interval_ms(22), 40);
    }

    #[test]
    fn test_drop_interval_never_below_floor() {
        for level in 0..300 {
            assert!(
                drop_interval_ms(level) >= DROP_FLOOR_MS,
                "interval below floor at level {}",
                level
            );
        }
    }
}

//! Scoring module - line clear points, drop bonuses, level and gravity
//!
//! Rules:
//! - Clearing 1/2/3/4 rows is worth 100/300/500/800 times the current level.
//!   The level used is the one in effect before the clear is counted.
//! - Soft drop earns 1 point per invocation; hard drop 2 points per row.
//! - One level is gained when cumulative lines reach the next multiple of
//!   `lines_per_level`; gravity then speeds up by a fixed step down to a floor.

use crate::config::GameConfig;
use crate::types::{HARD_DROP_POINTS_PER_ROW, LINE_SCORES, SOFT_DROP_POINTS};

/// Calculate line clear score
/// rows: number of rows cleared by one lock
/// level: level before any level-up from this clear (1-based)
pub fn line_clear_points(rows: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(rows)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Points for a hard drop of `rows` rows
pub fn hard_drop_points(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Points for one soft drop step
pub fn soft_drop_points() -> u32 {
    SOFT_DROP_POINTS
}

/// Level implied by a total line count (1-based)
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    total_lines / lines_per_level.max(1) + 1
}

/// Gravity delay for a level, clamped at the configured floor
pub fn gravity_delay_ms(level: u32, config: &GameConfig) -> u32 {
    let step = config
        .level_step_ms
        .saturating_mul(level.saturating_sub(1));
    config
        .start_delay_ms
        .saturating_sub(step)
        .max(config.min_delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);

        // Level multiplier
        assert_eq!(line_clear_points(1, 3), 300);
        assert_eq!(line_clear_points(4, 7), 5600);
    }

    #[test]
    fn test_unmapped_row_counts_score_nothing() {
        assert_eq!(line_clear_points(5, 2), 0);
        assert_eq!(line_clear_points(20, 2), 0);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(soft_drop_points(), 1);
        assert_eq!(hard_drop_points(0), 0);
        assert_eq!(hard_drop_points(17), 34);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0, 10), 1);
        assert_eq!(level_for_lines(9, 10), 1);
        assert_eq!(level_for_lines(10, 10), 2);
        assert_eq!(level_for_lines(29, 10), 3);
        assert_eq!(level_for_lines(4, 2), 3);
    }

    #[test]
    fn test_gravity_delays() {
        let config = GameConfig::default();
        assert_eq!(gravity_delay_ms(1, &config), 500);
        assert_eq!(gravity_delay_ms(2, &config), 460);
        assert_eq!(gravity_delay_ms(11, &config), 100);
        assert_eq!(gravity_delay_ms(12, &config), 80);
        assert_eq!(gravity_delay_ms(40, &config), 80); // Floor at 80
    }
}

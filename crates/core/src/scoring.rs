//! Scoring module - classic line-clear scoring and level progression
//!
//! Both functions are pure so the policy can be tested without a game or a timer.
//! Line clears score a flat table (no level multiplier). Every `lines_per_level`
//! lines earn a level-up and a faster gravity interval, until the level passes
//! `last_speedup_level`.

use crate::config::GameConfig;
use crate::types::LINE_SCORES;

/// Result of applying one lock event to the score/level counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub score_delta: u32,
    pub level: u32,
    pub lines_toward_next_level: u32,
    /// How much shorter the gravity interval becomes
    pub gravity_delta_ms: u32,
    pub leveled_up: bool,
}

/// Points for clearing `lines` rows at once (1-4). Anything else scores 0.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines > 4 {
        return 0;
    }
    LINE_SCORES[lines]
}

/// Apply `lines` cleared rows to the level counters.
///
/// The counter toward the next level resets to 0 (it is not decremented) when a
/// level-up is granted, so a single lock earns at most one level. Only a lock that
/// clears rows can level up; a `lines_per_level` of 0 is treated as 1.
pub fn progress(lines: usize, level: u32, lines_toward: u32, config: &GameConfig) -> Progress {
    let lines_toward = lines_toward.saturating_add(lines as u32);
    let mut out = Progress {
        score_delta: line_clear_score(lines),
        level,
        lines_toward_next_level: lines_toward,
        gravity_delta_ms: 0,
        leveled_up: false,
    };

    let threshold = config.lines_per_level.max(1);
    if lines > 0 && lines_toward >= threshold && level <= config.last_speedup_level {
        out.level = level + 1;
        out.lines_toward_next_level = 0;
        out.gravity_delta_ms = config.gravity_step_ms;
        out.leveled_up = true;
    }

    out
}

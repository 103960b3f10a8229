//! Game configuration.
//!
//! Timing is owned by the driver, but the level policy needs the step sizes, so
//! they travel with the game.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_GRAVITY_MS, GRAVITY_STEP_MS, LAST_SPEEDUP_LEVEL, LINES_PER_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gravity interval at the starting level
    pub initial_gravity_ms: u32,
    /// Interval decrease per level-up
    pub gravity_step_ms: u32,
    /// Lines that must accumulate before a level-up
    pub lines_per_level: u32,
    /// Level-ups only happen while the level is at most this
    pub last_speedup_level: u32,
    /// Piece RNG seed; clock-seeded when absent
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_gravity_ms: DEFAULT_GRAVITY_MS,
            gravity_step_ms: GRAVITY_STEP_MS,
            lines_per_level: LINES_PER_LEVEL,
            last_speedup_level: LAST_SPEEDUP_LEVEL,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `GRIDFALL_GRAVITY_MS`
    /// - `GRIDFALL_GRAVITY_STEP_MS`
    /// - `GRIDFALL_LINES_PER_LEVEL`
    /// - `GRIDFALL_LAST_SPEEDUP_LEVEL`
    /// - `GRIDFALL_SEED`
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        let lines_per_level = parse("GRIDFALL_LINES_PER_LEVEL")
            .filter(|&n| n > 0)
            .unwrap_or(defaults.lines_per_level);

        Self {
            initial_gravity_ms: parse("GRIDFALL_GRAVITY_MS")
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.initial_gravity_ms),
            gravity_step_ms: parse("GRIDFALL_GRAVITY_STEP_MS").unwrap_or(defaults.gravity_step_ms),
            lines_per_level,
            last_speedup_level: parse("GRIDFALL_LAST_SPEEDUP_LEVEL")
                .unwrap_or(defaults.last_speedup_level),
            seed: parse("GRIDFALL_SEED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_classic_timing() {
        let config = GameConfig::default();
        assert_eq!(config.initial_gravity_ms, 400);
        assert_eq!(config.gravity_step_ms, 30);
        assert_eq!(config.lines_per_level, 10);
        assert_eq!(config.last_speedup_level, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_lookup_overrides_and_falls_back() {
        let vars: HashMap<&str, &str> = [
            ("GRIDFALL_GRAVITY_MS", "250"),
            ("GRIDFALL_GRAVITY_STEP_MS", "nope"),
            ("GRIDFALL_LINES_PER_LEVEL", "0"),
            ("GRIDFALL_SEED", " 42 "),
        ]
        .into_iter()
        .collect();

        let config = GameConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.initial_gravity_ms, 250);
        assert_eq!(config.gravity_step_ms, 30);
        assert_eq!(config.lines_per_level, 10);
        assert_eq!(config.last_speedup_level, 10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"initial_gravity_ms": 500}"#).unwrap();
        assert_eq!(config.initial_gravity_ms, 500);
        assert_eq!(config.gravity_step_ms, 30);
    }
}

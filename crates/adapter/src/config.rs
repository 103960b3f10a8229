use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub game: GameConfig,
    /// Capacity of the inbound command queue
    pub max_pending_commands: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_pending_commands: 64,
        }
    }
}

impl AdapterConfig {
    /// Create from environment variables (`GRIDFALL_MAX_PENDING` plus the game's).
    pub fn from_env() -> Self {
        let max_pending_commands = std::env::var("GRIDFALL_MAX_PENDING")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(64)
            .max(1);

        Self {
            game: GameConfig::from_env(),
            max_pending_commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_capacity() {
        let config = AdapterConfig::default();
        assert_eq!(config.max_pending_commands, 64);
        assert_eq!(config.game, GameConfig::default());
    }
}

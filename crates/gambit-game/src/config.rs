//! Game configuration.

use std::time::Duration;

/// Settings fixed when a [`Game`](crate::Game) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting allotment on each player's clock.
    pub time_per_side: Duration,
}

impl GameConfig {
    /// Ten minutes per player.
    pub const DEFAULT_TIME_PER_SIDE: Duration = Duration::from_secs(10 * 60);

    /// Replace the clock allotment.
    pub fn with_time_per_side(mut self, time_per_side: Duration) -> Self {
        self.time_per_side = time_per_side;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_per_side: Self::DEFAULT_TIME_PER_SIDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_minutes() {
        assert_eq!(GameConfig::default().time_per_side, Duration::from_secs(600));
    }

    #[test]
    fn builder_overrides_time() {
        let config = GameConfig::default().with_time_per_side(Duration::from_secs(90));
        assert_eq!(config.time_per_side, Duration::from_secs(90));
    }
}

use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Timing of a round, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Countdown ticks from this value down to zero.
    pub countdown: u32,
    /// Pause between two ticks.
    pub between: Duration,
    /// How long participants get to throw. Also the window advertised to them.
    pub limit: Duration,
}

impl RoundConfig {
    pub fn new(countdown: u32, between: Duration, limit: Duration) -> Self {
        Self {
            countdown,
            between,
            limit,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            countdown: COUNTDOWN_START,
            between: Duration::from_millis(TIME_BETWEEN_COUNTS),
            limit: Duration::from_millis(THROW_TIME_LIMIT),
        }
    }
}

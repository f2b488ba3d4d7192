use std::env;
use std::time::Duration;

/// Pacing for the auto-played opening move. The delay exists purely so the
/// solver sees the starting position before the opponent's move lands; it
/// has no correctness role and tests run it at zero.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub intro_delay: Duration,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let ms = env::var("PUZZLE_INTRO_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);
        Self {
            intro_delay: Duration::from_millis(ms),
        }
    }

    /// Zero-delay configuration for deterministic tests.
    pub fn immediate() -> Self {
        Self {
            intro_delay: Duration::ZERO,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            intro_delay: Duration::from_millis(1000),
        }
    }
}

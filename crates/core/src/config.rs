//! Session configuration
//!
//! Environment variables:
//!
//! - `BLOCKFALL_SEED`: seed for the uniform piece source (default: 1)
//! - `BLOCKFALL_LEVEL_GRAVITY`: "0"/"false" keeps gravity at the base
//!   cadence on every level (default: enabled)

use std::env;

/// Settings for a new game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the uniform piece source
    pub seed: u32,
    /// Whether gravity speeds up with level
    pub level_gravity: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            level_gravity: true,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let level_gravity = lookup("BLOCKFALL_LEVEL_GRAVITY")
            .map(|v| {
                let v = v.trim().to_lowercase();
                !(v == "0" || v == "false" || v == "off")
            })
            .unwrap_or(defaults.level_gravity);

        Self {
            seed,
            level_gravity,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

//! Session configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Most wrong options a learn question offers.
pub const MAX_DISTRACTORS: usize = 3;

/// Settings shared by all study sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySettings {
    /// How long a mismatched pair stays marked wrong in the match game.
    pub match_cooldown_ms: u64,
    /// Sampling period of the match game clock.
    pub clock_tick_ms: u64,
    /// Number of wrong options offered per learn question.
    pub distractor_count: usize,
    /// Fixed seed for reproducible shuffles. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            match_cooldown_ms: 800,
            clock_tick_ms: 100,
            distractor_count: 3,
            seed: None,
        }
    }
}

impl StudySettings {
    /// Settings with a fixed seed, otherwise default.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Apply overrides on top of these settings.
    pub fn merge(&self, overrides: &SettingsOverrides) -> Self {
        Self {
            match_cooldown_ms: overrides.match_cooldown_ms.unwrap_or(self.match_cooldown_ms),
            clock_tick_ms: overrides.clock_tick_ms.unwrap_or(self.clock_tick_ms),
            distractor_count: overrides.distractor_count.unwrap_or(self.distractor_count),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn match_cooldown(&self) -> Duration {
        Duration::from_millis(self.match_cooldown_ms)
    }

    /// Wrong options per learn question, clamped to 1..=3 so a question
    /// always has between 2 and 4 options.
    pub fn distractors(&self) -> usize {
        self.distractor_count.clamp(1, MAX_DISTRACTORS)
    }

    /// Clock sampling period, never shorter than 1ms.
    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms.max(1))
    }

    /// Random source for a new session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Optional overrides (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_cooldown_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_tick_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distractor_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

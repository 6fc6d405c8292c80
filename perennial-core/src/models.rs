use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;
use uuid::Uuid;

pub type ProfileId = Uuid;
pub type FactId = Uuid;

pub const EASE_MIN: f64 = 1.3;
pub const EASE_DEFAULT: f64 = 2.5;
pub const MODIFIER_DEFAULT: f64 = 1.0;
pub const BASE_INTERVAL_DEFAULT: u32 = 1;

pub const EASE_RANGE: RangeInclusive<f64> = 1.3..=4.0;
pub const MODIFIER_RANGE: RangeInclusive<f64> = 0.5..=2.0;

pub const AGAIN_EASE_DELTA: f64 = -0.2;
pub const HARD_EASE_DELTA: f64 = -0.15;
pub const EASY_EASE_DELTA: f64 = 0.15;
pub const HARD_MULTIPLIER: f64 = 1.2;
pub const EASY_BONUS: f64 = 1.3;

/// Recall quality reported for one review.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// Accepts the full name, its first letter, or the button number (1-4).
    pub fn parse(s: &str) -> Option<Rating> {
        match s.trim().to_lowercase().as_str() {
            "1" | "a" | "again" => Some(Rating::Again),
            "2" | "h" | "hard" => Some(Rating::Hard),
            "3" | "g" | "good" => Some(Rating::Good),
            "4" | "e" | "easy" => Some(Rating::Easy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::parse(s).ok_or(CoreError::Invalid("unknown rating"))
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-profile scheduling knobs, also the body of `PATCH /profiles/{id}/srs`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SrsConfig {
    #[serde(default = "default_base_interval")]
    pub base_interval_days: u32,
    #[serde(default = "default_ease")]
    pub ease_multiplier: f64,
    #[serde(default = "default_modifier")]
    pub interval_modifier: f64,
}

fn default_base_interval() -> u32 {
    BASE_INTERVAL_DEFAULT
}

fn default_ease() -> f64 {
    EASE_DEFAULT
}

fn default_modifier() -> f64 {
    MODIFIER_DEFAULT
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            base_interval_days: BASE_INTERVAL_DEFAULT,
            ease_multiplier: EASE_DEFAULT,
            interval_modifier: MODIFIER_DEFAULT,
        }
    }
}

/// State after one simulated review; feeds the next step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct StepResult {
    pub interval_days: u64,
    pub ease: f64,
}

use super::types::TileState;
use crate::error::{FbResult, FourBError};
use serde::{Deserialize, Serialize};

/// A single banding condition. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    AtMost(f64),
    AtLeast(f64),
    Within(f64, f64),
}

impl Tier {
    #[inline(always)]
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Tier::AtMost(max) => value <= max,
            Tier::AtLeast(min) => value >= min,
            Tier::Within(lo, hi) => value >= lo && value <= hi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStep {
    pub when: Tier,
    pub score: f64,
}

/// Ordered list of (condition, score) pairs. The first matching step wins,
/// otherwise `fallback` is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierScale {
    pub steps: Vec<TierStep>,
    pub fallback: f64,
}

impl TierScale {
    pub fn new(steps: &[(Tier, f64)], fallback: f64) -> Self {
        Self {
            steps: steps
                .iter()
                .map(|&(when, score)| TierStep { when, score })
                .collect(),
            fallback,
        }
    }

    /// 100 / 75 / 50 band where smaller values are better.
    pub fn lower_is_better(excellent: f64, acceptable: f64) -> Self {
        Self::new(
            &[(Tier::AtMost(excellent), 100.0), (Tier::AtMost(acceptable), 75.0)],
            50.0,
        )
    }

    /// 100 / 75 / 50 band where larger values are better.
    pub fn higher_is_better(excellent: f64, acceptable: f64) -> Self {
        Self::new(
            &[(Tier::AtLeast(excellent), 100.0), (Tier::AtLeast(acceptable), 75.0)],
            50.0,
        )
    }

    pub fn score(&self, value: f64) -> f64 {
        self.steps
            .iter()
            .find(|s| s.when.contains(value))
            .map_or(self.fallback, |s| s.score)
    }

    pub fn validate(&self, name: &str) -> FbResult<()> {
        if self.steps.is_empty() {
            return Err(FourBError::Validation(format!("{} has no tiers", name)));
        }
        for step in &self.steps {
            if let Tier::Within(lo, hi) = step.when {
                if lo > hi {
                    return Err(FourBError::Validation(format!(
                        "{}: window [{}, {}] is inverted",
                        name, lo, hi
                    )));
                }
            }
            if !step.score.is_finite() {
                return Err(FourBError::Validation(format!(
                    "{}: non-finite tier score",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Two inclusive lower bounds splitting a score into three states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateCutoffs {
    pub synced: f64,
    pub developing: f64,
}

impl StateCutoffs {
    pub const fn new(synced: f64, developing: f64) -> Self {
        Self { synced, developing }
    }

    pub fn classify(&self, score: f64) -> TileState {
        if score >= self.synced {
            TileState::Synced
        } else if score >= self.developing {
            TileState::Developing
        } else {
            TileState::Limiting
        }
    }

    pub fn validate(&self, name: &str) -> FbResult<()> {
        if self.synced < self.developing {
            return Err(FourBError::Validation(format!(
                "{}: synced cutoff {} is below developing cutoff {}",
                name, self.synced, self.developing
            )));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Competitive level of a player. Used purely as a lookup key into
/// level-dependent target tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum PlayerLevel {
    Youth,
    #[strum(serialize = "HS")]
    Hs,
    College,
    Pro,
    #[default]
    Other,
}

impl PlayerLevel {
    /// Lenient parse. Accepts the long display labels ("HS (14-18)"),
    /// short codes ("HS", "MLB") and common spellings. Anything
    /// unrecognized falls back to `Other`.
    pub fn parse(raw: &str) -> Self {
        // "HS (14-18)" -> "hs"
        let head = raw.split('(').next().unwrap_or("").trim().to_lowercase();

        match head.as_str() {
            "youth" | "little league" | "12u" | "14u" => Self::Youth,
            "hs" | "high school" | "highschool" => Self::Hs,
            "college" | "ncaa" | "juco" => Self::College,
            "pro" | "mlb" | "milb" | "professional" => Self::Pro,
            _ => Self::Other,
        }
    }
}

impl From<&str> for PlayerLevel {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for PlayerLevel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<PlayerLevel> for String {
    fn from(level: PlayerLevel) -> Self {
        level.to_string()
    }
}

/// Coarse quality bucket attached to every score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TileState {
    Synced,
    Developing,
    Limiting,
    NoData,
}

/// The four measurement pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Pillar {
    Brain,
    Body,
    Bat,
    Ball,
}

/// Human-readable label for each non-empty state of one scorer.
#[derive(Debug, Clone, Copy)]
pub struct StateLabels {
    pub synced: &'static str,
    pub developing: &'static str,
    pub limiting: &'static str,
}

impl StateLabels {
    pub fn for_state(&self, state: TileState) -> &'static str {
        match state {
            TileState::Synced => self.synced,
            TileState::Developing => self.developing,
            TileState::Limiting => self.limiting,
            TileState::NoData => NO_DATA_LABEL,
        }
    }
}

pub const NO_DATA_LABEL: &str = "No Data";

pub const BRAIN_LABELS: StateLabels = StateLabels {
    synced: "Synced",
    developing: "Growing",
    limiting: "Limiting Factor",
};

pub const BODY_LABELS: StateLabels = StateLabels {
    synced: "Anchored",
    developing: "Drifting",
    limiting: "Unstable",
};

pub const BAT_LABELS: StateLabels = StateLabels {
    synced: "Bat On Plane",
    developing: "Inconsistent",
    limiting: "Bat Leak",
};

pub const BALL_LABELS: StateLabels = StateLabels {
    synced: "Matched Impact",
    developing: "Underused Impact",
    limiting: "Mismatched Impact",
};

pub const OVERALL_LABELS: StateLabels = StateLabels {
    synced: "4B Synced",
    developing: "4B Developing",
    limiting: "4B Out of Sync",
};

// === RAW INPUT RECORDS ===

/// Cognitive test percentiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainData {
    pub processing_speed: Option<f64>,
    pub tracking_focus: Option<f64>,
    pub impulse_control: Option<f64>,
    pub decision_making: Option<f64>,
    pub overall_percentile: Option<f64>,
}

/// Motion-capture summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyData {
    pub com_forward_movement_pct: Option<f64>,
    pub spine_stability_score: Option<f64>,
    pub spine_angle_var_deg: Option<f64>,
    pub head_movement_inches: Option<f64>,
}

/// Bat sensor summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatData {
    pub avg_bat_speed: Option<f64>,
    pub bat_speed_sd: Option<f64>,
    pub attack_angle_avg: Option<f64>,
    pub attack_angle_sd: Option<f64>,
}

/// Ball tracker summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallData {
    pub ev90: Option<f64>,
    pub la90: Option<f64>,
    pub la_sd: Option<f64>,
    pub barrel_like_rate: Option<f64>,
}

// === RESULTS ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: Option<f64>,
    pub state: TileState,
    pub label: String,
}

impl ScoreResult {
    pub fn no_data() -> Self {
        Self {
            score: None,
            state: TileState::NoData,
            label: NO_DATA_LABEL.to_string(),
        }
    }

    /// Pairs a present score with its state. Only constructor for a
    /// non-empty result, so `score` is `None` iff the state is `NoData`.
    pub fn classified(score: f64, state: TileState, labels: &StateLabels) -> Self {
        debug_assert!(state != TileState::NoData);
        Self {
            score: Some(score),
            state,
            label: labels.for_state(state).to_string(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.score.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourBSummary {
    pub overall_score: Option<f64>,
    pub overall_state: TileState,
    pub overall_label: String,
    pub strongest_area: Option<Pillar>,
    pub focus_area: Option<Pillar>,
}

/// Optional per-pillar scores fed to the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarScores {
    pub brain: Option<f64>,
    pub body: Option<f64>,
    pub bat: Option<f64>,
    pub ball: Option<f64>,
}

impl PillarScores {
    pub fn from_results(
        brain: &ScoreResult,
        body: &ScoreResult,
        bat: &ScoreResult,
        ball: &ScoreResult,
    ) -> Self {
        Self {
            brain: brain.score,
            body: body.score,
            bat: bat.score,
            ball: ball.score,
        }
    }

    pub fn entries(&self) -> [(Pillar, Option<f64>); 4] {
        [
            (Pillar::Brain, self.brain),
            (Pillar::Body, self.body),
            (Pillar::Bat, self.bat),
            (Pillar::Ball, self.ball),
        ]
    }
}

/// One player's stored measurements, as handed over by the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub name: Option<String>,
    pub level: PlayerLevel,
    pub brain: Option<BrainData>,
    pub body: Option<BodyData>,
    pub bat: Option<BatData>,
    pub ball: Option<BallData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub name: Option<String>,
    pub level: PlayerLevel,
    pub brain: ScoreResult,
    pub body: ScoreResult,
    pub bat: ScoreResult,
    pub ball: ScoreResult,
    pub summary: FourBSummary,
}

use crate::error::{FbResult, FourBError};
use crate::scorer::tiers::{StateCutoffs, Tier, TierScale};
use crate::scorer::types::PlayerLevel;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One value per player level. A struct rather than a map so that a
/// lookup can never come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTable {
    pub youth: f64,
    pub hs: f64,
    pub college: f64,
    pub pro: f64,
    pub other: f64,
}

impl LevelTable {
    #[inline(always)]
    pub fn get(&self, level: PlayerLevel) -> f64 {
        match level {
            PlayerLevel::Youth => self.youth,
            PlayerLevel::Hs => self.hs,
            PlayerLevel::College => self.college,
            PlayerLevel::Pro => self.pro,
            PlayerLevel::Other => self.other,
        }
    }

    fn validate_positive(&self, name: &str) -> FbResult<()> {
        for (level, v) in [
            ("youth", self.youth),
            ("hs", self.hs),
            ("college", self.college),
            ("pro", self.pro),
            ("other", self.other),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(FourBError::Validation(format!(
                    "{}.{} must be a positive number (got {})",
                    name, level, v
                )));
            }
        }
        Ok(())
    }
}

// === PRIMARY ENGINE ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyBands {
    pub com_forward_pct: TierScale,
    pub spine_angle_var_deg: TierScale,
    pub head_movement_inches: TierScale,
    pub spine_stability: TierScale,
}

impl Default for BodyBands {
    fn default() -> Self {
        Self {
            com_forward_pct: TierScale::lower_is_better(20.0, 40.0),
            spine_angle_var_deg: TierScale::lower_is_better(5.0, 10.0),
            head_movement_inches: TierScale::lower_is_better(3.0, 6.0),
            spine_stability: TierScale::higher_is_better(85.0, 70.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchStandards {
    pub barrel_min: f64,
    pub barrel_max: f64,
    pub ideal_min: f64,
    pub ideal_max: f64,
    pub sd_excellent: f64,
}

impl Default for LaunchStandards {
    fn default() -> Self {
        Self {
            barrel_min: 10.0,
            barrel_max: 30.0,
            ideal_min: 12.0,
            ideal_max: 25.0,
            sd_excellent: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatStandards {
    pub attack_angle_min: f64,
    pub attack_angle_max: f64,
    pub attack_angle_sd_max: f64,
    pub speed_sd_excellent: f64,
    pub speed_sd_acceptable: f64,
}

impl Default for BatStandards {
    fn default() -> Self {
        Self {
            attack_angle_min: 8.0,
            attack_angle_max: 20.0,
            attack_angle_sd_max: 4.0,
            speed_sd_excellent: 3.0,
            speed_sd_acceptable: 5.0,
        }
    }
}

/// Multipliers applied on top of the target ratio in the Bat and Ball scorers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub speed_sd_penalty: f64,
    pub attack_angle_penalty: f64,
    pub la_sd_penalty: f64,
    pub barrel_bonus: f64,
    pub barrel_bonus_min_rate: f64,
    pub barrel_ev_factor: f64,
    pub barrel_ev_floor: f64,
    pub score_cap: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            speed_sd_penalty: 0.9,
            attack_angle_penalty: 0.85,
            la_sd_penalty: 0.9,
            barrel_bonus: 1.05,
            barrel_bonus_min_rate: 0.4,
            barrel_ev_factor: 0.9,
            barrel_ev_floor: 70.0,
            score_cap: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cutoffs {
    pub cognition: StateCutoffs,
    pub body: StateCutoffs,
    pub bat: StateCutoffs,
    pub ball: StateCutoffs,
    pub overall: StateCutoffs,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            cognition: StateCutoffs::new(70.0, 40.0),
            body: StateCutoffs::new(85.0, 65.0),
            bat: StateCutoffs::new(80.0, 60.0),
            ball: StateCutoffs::new(80.0, 60.0),
            overall: StateCutoffs::new(80.0, 60.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub bat_speed_targets: LevelTable,
    pub ev90_targets: LevelTable,
    pub body: BodyBands,
    pub launch: LaunchStandards,
    pub bat: BatStandards,
    pub adjustments: Adjustments,
    pub cutoffs: Cutoffs,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bat_speed_targets: LevelTable {
                youth: 55.0,
                hs: 68.0,
                college: 72.0,
                pro: 75.0,
                other: 65.0,
            },
            ev90_targets: LevelTable {
                youth: 75.0,
                hs: 90.0,
                college: 95.0,
                pro: 103.0,
                other: 85.0,
            },
            body: BodyBands::default(),
            launch: LaunchStandards::default(),
            bat: BatStandards::default(),
            adjustments: Adjustments::default(),
            cutoffs: Cutoffs::default(),
        }
    }
}

// === MODEL VARIANT ===

/// Bounds outside which a model swing is flagged as anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeirdnessLimits {
    pub com_min_pct: f64,
    pub com_max_pct: f64,
    pub head_max_inches: f64,
    pub spine_sd_max_deg: f64,
    pub sequence_min_score: f64,
}

impl Default for WeirdnessLimits {
    fn default() -> Self {
        Self {
            com_min_pct: 5.0,
            com_max_pct: 40.0,
            head_max_inches: 18.0,
            spine_sd_max_deg: 25.0,
            sequence_min_score: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelThresholds {
    pub min_frames: usize,
    /// Normalized-height to inches conversion (a ~6ft frame).
    pub head_inches_scale: f64,
    /// Fractional frame positions of the pelvis, torso, arm and bat events.
    pub sequence_offsets: [f64; 4],
    pub com_forward_pct: TierScale,
    pub head_movement_inches: TierScale,
    pub spine_angle_sd_deg: TierScale,
    /// Scored against `value / level_target`.
    pub target_ratio: TierScale,
    pub attack_angle_deg: TierScale,
    pub time_in_zone_ms: TierScale,
    pub la90_deg: TierScale,
    pub hit_rate: TierScale,
    pub weirdness: WeirdnessLimits,
}

impl Default for ModelThresholds {
    fn default() -> Self {
        Self {
            min_frames: 8,
            head_inches_scale: 72.0,
            sequence_offsets: [0.30, 0.50, 0.70, 0.85],
            com_forward_pct: TierScale::new(
                &[
                    (Tier::Within(18.0, 22.0), 100.0),
                    (Tier::Within(15.0, 25.0), 80.0),
                    (Tier::Within(10.0, 30.0), 60.0),
                ],
                40.0,
            ),
            head_movement_inches: TierScale::new(
                &[
                    (Tier::AtMost(2.0), 100.0),
                    (Tier::AtMost(4.0), 80.0),
                    (Tier::AtMost(6.0), 60.0),
                ],
                40.0,
            ),
            spine_angle_sd_deg: TierScale::new(
                &[
                    (Tier::AtMost(3.0), 100.0),
                    (Tier::AtMost(6.0), 80.0),
                    (Tier::AtMost(10.0), 60.0),
                ],
                40.0,
            ),
            target_ratio: TierScale::new(
                &[
                    (Tier::AtLeast(1.0), 100.0),
                    (Tier::AtLeast(0.95), 80.0),
                    (Tier::AtLeast(0.90), 60.0),
                ],
                40.0,
            ),
            attack_angle_deg: TierScale::new(
                &[
                    (Tier::Within(10.0, 16.0), 100.0),
                    (Tier::Within(8.0, 20.0), 80.0),
                    (Tier::Within(5.0, 25.0), 60.0),
                ],
                40.0,
            ),
            time_in_zone_ms: TierScale::new(
                &[
                    (Tier::AtLeast(150.0), 100.0),
                    (Tier::AtLeast(120.0), 80.0),
                    (Tier::AtLeast(90.0), 60.0),
                ],
                40.0,
            ),
            la90_deg: TierScale::new(
                &[
                    (Tier::Within(15.0, 25.0), 100.0),
                    (Tier::Within(10.0, 30.0), 80.0),
                    (Tier::Within(5.0, 35.0), 60.0),
                ],
                40.0,
            ),
            hit_rate: TierScale::new(
                &[
                    (Tier::AtLeast(0.5), 100.0),
                    (Tier::AtLeast(0.4), 80.0),
                    (Tier::AtLeast(0.3), 60.0),
                ],
                40.0,
            ),
            weirdness: WeirdnessLimits::default(),
        }
    }
}

// === TOP LEVEL ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    pub model: ModelThresholds,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FbResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Loaded scoring config from {}", path.display());
        Ok(config)
    }

    /// Rejects tables that would make a scorer divide by zero or
    /// classify inconsistently.
    pub fn validate(&self) -> FbResult<()> {
        let t = &self.thresholds;
        t.bat_speed_targets.validate_positive("bat_speed_targets")?;
        t.ev90_targets.validate_positive("ev90_targets")?;

        t.body.com_forward_pct.validate("body.com_forward_pct")?;
        t.body.spine_angle_var_deg.validate("body.spine_angle_var_deg")?;
        t.body.head_movement_inches.validate("body.head_movement_inches")?;
        t.body.spine_stability.validate("body.spine_stability")?;

        if t.launch.barrel_min > t.launch.barrel_max {
            return Err(FourBError::Validation(
                "launch.barrel_min exceeds launch.barrel_max".to_string(),
            ));
        }
        if t.launch.ideal_min > t.launch.ideal_max {
            return Err(FourBError::Validation(
                "launch.ideal_min exceeds launch.ideal_max".to_string(),
            ));
        }
        if t.bat.attack_angle_min > t.bat.attack_angle_max {
            return Err(FourBError::Validation(
                "bat.attack_angle_min exceeds bat.attack_angle_max".to_string(),
            ));
        }

        t.cutoffs.cognition.validate("cutoffs.cognition")?;
        t.cutoffs.body.validate("cutoffs.body")?;
        t.cutoffs.bat.validate("cutoffs.bat")?;
        t.cutoffs.ball.validate("cutoffs.ball")?;
        t.cutoffs.overall.validate("cutoffs.overall")?;

        let m = &self.model;
        if m.min_frames < 2 {
            return Err(FourBError::Validation(
                "model.min_frames must be at least 2".to_string(),
            ));
        }
        if !m.sequence_offsets.windows(2).all(|w| w[0] < w[1]) {
            return Err(FourBError::Validation(
                "model.sequence_offsets must be strictly increasing".to_string(),
            ));
        }
        m.com_forward_pct.validate("model.com_forward_pct")?;
        m.head_movement_inches.validate("model.head_movement_inches")?;
        m.spine_angle_sd_deg.validate("model.spine_angle_sd_deg")?;
        m.target_ratio.validate("model.target_ratio")?;
        m.attack_angle_deg.validate("model.attack_angle_deg")?;
        m.time_in_zone_ms.validate("model.time_in_zone_ms")?;
        m.la90_deg.validate("model.la90_deg")?;
        m.hit_rate.validate("model.hit_rate")?;

        Ok(())
    }

    /// Applies cutoffs given explicitly on the command line on top of
    /// whatever was loaded from file.
    pub fn merge_from_cli(&mut self, overrides: &CutoffOverrides) -> FbResult<()> {
        let cutoffs = &mut self.thresholds.cutoffs;

        macro_rules! update_if_present {
            ($field:ident . $part:ident, $src:ident) => {
                if let Some(v) = overrides.$src {
                    cutoffs.$field.$part = v;
                }
            };
        }

        update_if_present!(cognition.synced, brain_synced);
        update_if_present!(cognition.developing, brain_developing);
        update_if_present!(body.synced, body_synced);
        update_if_present!(body.developing, body_developing);
        update_if_present!(bat.synced, bat_synced);
        update_if_present!(bat.developing, bat_developing);
        update_if_present!(ball.synced, ball_synced);
        update_if_present!(ball.developing, ball_developing);
        update_if_present!(overall.synced, overall_synced);
        update_if_present!(overall.developing, overall_developing);

        if overrides.any() {
            warn!("Using command-line state cutoffs: {:?}", self.thresholds.cutoffs);
        }
        self.validate()
    }
}

/// Command-line overrides for the state cutoff pairs.
#[derive(Args, Debug, Clone, Default)]
pub struct CutoffOverrides {
    #[arg(long, global = true)]
    pub brain_synced: Option<f64>,
    #[arg(long, global = true)]
    pub brain_developing: Option<f64>,
    #[arg(long, global = true)]
    pub body_synced: Option<f64>,
    #[arg(long, global = true)]
    pub body_developing: Option<f64>,
    #[arg(long, global = true)]
    pub bat_synced: Option<f64>,
    #[arg(long, global = true)]
    pub bat_developing: Option<f64>,
    #[arg(long, global = true)]
    pub ball_synced: Option<f64>,
    #[arg(long, global = true)]
    pub ball_developing: Option<f64>,
    #[arg(long, global = true)]
    pub overall_synced: Option<f64>,
    #[arg(long, global = true)]
    pub overall_developing: Option<f64>,
}

impl CutoffOverrides {
    pub fn any(&self) -> bool {
        [
            self.brain_synced,
            self.brain_developing,
            self.body_synced,
            self.body_developing,
            self.bat_synced,
            self.bat_developing,
            self.ball_synced,
            self.ball_developing,
            self.overall_synced,
            self.overall_developing,
        ]
        .iter()
        .any(Option::is_some)
    }
}

pub mod ball_metrics;
pub mod model;
pub mod pillars;
pub mod summary;
pub mod tiers;
pub mod types;

pub use self::ball_metrics::BallSampleStats;
pub use self::model::{RebootMetrics, SwingCapture};
pub use self::types::{
    BallData, BatData, BodyData, BrainData, FourBSummary, Pillar, PillarScores, PlayerLevel,
    PlayerRecord, PlayerReport, ScoreResult, TileState,
};
use crate::config::Config;

/// Scoring engine bound to one set of thresholds. Immutable once built,
/// so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub config: Config,
}

impl Scorer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn brain(&self, data: Option<&BrainData>) -> ScoreResult {
        pillars::brain_score(data, &self.config.thresholds)
    }

    pub fn body(&self, data: Option<&BodyData>) -> ScoreResult {
        pillars::body_score(data, &self.config.thresholds)
    }

    pub fn bat(&self, data: Option<&BatData>, level: PlayerLevel) -> ScoreResult {
        let t = &self.config.thresholds;
        pillars::bat_score(data, t.bat_speed_targets.get(level), t)
    }

    pub fn ball(&self, data: Option<&BallData>, level: PlayerLevel) -> ScoreResult {
        let t = &self.config.thresholds;
        pillars::ball_score(data, t.ev90_targets.get(level), t)
    }

    pub fn summary(&self, scores: &PillarScores) -> FourBSummary {
        summary::four_b_summary(scores, &self.config.thresholds.cutoffs.overall)
    }

    pub fn ball_sample_stats(&self, exit_velocities: &[f64], launch_angles: &[f64]) -> BallSampleStats {
        ball_metrics::compute_ev90_la90(exit_velocities, launch_angles)
    }

    pub fn barrel_like_rate(
        &self,
        exit_velocities: &[f64],
        launch_angles: &[f64],
        player_ev90: f64,
    ) -> f64 {
        ball_metrics::compute_barrel_like_rate(
            exit_velocities,
            launch_angles,
            player_ev90,
            &self.config.thresholds,
        )
    }

    pub fn derive_ball_data(&self, exit_velocities: &[f64], launch_angles: &[f64]) -> BallData {
        ball_metrics::derive_ball_data(exit_velocities, launch_angles, &self.config.thresholds)
    }

    /// Scores every pillar of one record and aggregates them.
    pub fn score_player(&self, record: &PlayerRecord) -> PlayerReport {
        let brain = self.brain(record.brain.as_ref());
        let body = self.body(record.body.as_ref());
        let bat = self.bat(record.bat.as_ref(), record.level);
        let ball = self.ball(record.ball.as_ref(), record.level);
        let summary = self.summary(&PillarScores::from_results(&brain, &body, &bat, &ball));

        PlayerReport {
            name: record.name.clone(),
            level: record.level,
            brain,
            body,
            bat,
            ball,
            summary,
        }
    }

    pub fn reboot_metrics(&self, capture: &SwingCapture) -> RebootMetrics {
        model::compute_reboot_metrics(capture, &self.config.thresholds, &self.config.model)
    }
}

// === FREE FUNCTIONS (built-in thresholds) ===

pub fn calculate_brain_score(data: Option<&BrainData>) -> ScoreResult {
    Scorer::default().brain(data)
}

pub fn calculate_body_score(data: Option<&BodyData>) -> ScoreResult {
    Scorer::default().body(data)
}

pub fn calculate_bat_score(data: Option<&BatData>, level: PlayerLevel) -> ScoreResult {
    Scorer::default().bat(data, level)
}

pub fn calculate_ball_score(data: Option<&BallData>, level: PlayerLevel) -> ScoreResult {
    Scorer::default().ball(data, level)
}

pub fn calculate_four_b_summary(scores: &PillarScores) -> FourBSummary {
    Scorer::default().summary(scores)
}

pub fn compute_ev90_la90(exit_velocities: &[f64], launch_angles: &[f64]) -> BallSampleStats {
    ball_metrics::compute_ev90_la90(exit_velocities, launch_angles)
}

pub fn compute_barrel_like_rate(
    exit_velocities: &[f64],
    launch_angles: &[f64],
    player_ev90: f64,
) -> f64 {
    Scorer::default().barrel_like_rate(exit_velocities, launch_angles, player_ev90)
}

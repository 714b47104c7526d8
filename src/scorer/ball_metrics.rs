use super::types::BallData;
use crate::config::Thresholds;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Headline statistics of a batted-ball sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BallSampleStats {
    pub ev90: f64,
    pub la90: f64,
    pub la_sd: f64,
}

fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Value at the top-decile index of the descending sort. Not an
/// interpolated percentile.
fn top_decile(values: &[f64]) -> f64 {
    let mut sorted = finite(values);
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(|a, b| b.total_cmp(a));
    let idx = (sorted.len() as f64 * 0.1).floor() as usize;
    sorted.get(idx).copied().unwrap_or(sorted[0])
}

/// Population standard deviation of the finite values.
pub fn std_dev(values: &[f64]) -> f64 {
    let values = finite(values);
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

pub fn compute_ev90_la90(exit_velocities: &[f64], launch_angles: &[f64]) -> BallSampleStats {
    BallSampleStats {
        ev90: top_decile(exit_velocities),
        la90: top_decile(launch_angles),
        la_sd: std_dev(launch_angles),
    }
}

/// Fraction of swings that are both hard enough and inside the barrel
/// launch window. Swings without a paired launch angle never count.
pub fn compute_barrel_like_rate(
    exit_velocities: &[f64],
    launch_angles: &[f64],
    player_ev90: f64,
    t: &Thresholds,
) -> f64 {
    let total = exit_velocities.len();
    if total == 0 {
        return 0.0;
    }

    let adj = &t.adjustments;
    let ev_floor = (player_ev90 * adj.barrel_ev_factor).max(adj.barrel_ev_floor);
    let (la_min, la_max) = (t.launch.barrel_min, t.launch.barrel_max);

    let count = exit_velocities
        .iter()
        .zip(launch_angles)
        .filter(|&(&ev, &la)| ev >= ev_floor && la >= la_min && la <= la_max)
        .count();

    count as f64 / total as f64
}

/// Builds a complete Ball record from raw per-swing samples.
pub fn derive_ball_data(exit_velocities: &[f64], launch_angles: &[f64], t: &Thresholds) -> BallData {
    if exit_velocities.is_empty() {
        return BallData::default();
    }

    let stats = compute_ev90_la90(exit_velocities, launch_angles);
    let rate = compute_barrel_like_rate(exit_velocities, launch_angles, stats.ev90, t);

    debug!(
        "Ball sample n={} ev90={:.1} la90={:.1} la_sd={:.2} barrel_rate={:.3}",
        exit_velocities.len(),
        stats.ev90,
        stats.la90,
        stats.la_sd,
        rate
    );

    BallData {
        ev90: Some(stats.ev90),
        la90: (!launch_angles.is_empty()).then_some(stats.la90),
        la_sd: (!launch_angles.is_empty()).then_some(stats.la_sd),
        barrel_like_rate: Some(rate),
    }
}

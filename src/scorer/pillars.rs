use super::types::{
    BallData, BatData, BodyData, BrainData, ScoreResult, BALL_LABELS, BAT_LABELS, BODY_LABELS,
    BRAIN_LABELS,
};
use crate::config::Thresholds;

/// Mean of the present values, `None` when nothing is present.
pub(crate) fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Treats zero like a missing reading.
#[inline(always)]
fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|&x| x != 0.0 && !x.is_nan())
}

pub fn brain_score(data: Option<&BrainData>, t: &Thresholds) -> ScoreResult {
    let Some(d) = data else {
        return ScoreResult::no_data();
    };
    let Some(overall) = d.overall_percentile else {
        return ScoreResult::no_data();
    };

    let score = mean_present([
        d.processing_speed,
        d.tracking_focus,
        d.impulse_control,
        d.decision_making,
    ])
    .unwrap_or(overall);

    let state = t.cutoffs.cognition.classify(score);
    ScoreResult::classified(score, state, &BRAIN_LABELS)
}

pub fn body_score(data: Option<&BodyData>, t: &Thresholds) -> ScoreResult {
    let Some(d) = data else {
        return ScoreResult::no_data();
    };
    let bands = &t.body;

    let sub_scores = [
        d.com_forward_movement_pct
            .map(|v| bands.com_forward_pct.score(v)),
        d.spine_stability_score
            .map(|v| bands.spine_stability.score(v)),
        d.spine_angle_var_deg
            .map(|v| bands.spine_angle_var_deg.score(v)),
        d.head_movement_inches
            .map(|v| bands.head_movement_inches.score(v)),
    ];

    match mean_present(sub_scores) {
        Some(score) => {
            let state = t.cutoffs.body.classify(score);
            ScoreResult::classified(score, state, &BODY_LABELS)
        }
        None => ScoreResult::no_data(),
    }
}

pub fn bat_score(data: Option<&BatData>, target: f64, t: &Thresholds) -> ScoreResult {
    let Some(d) = data else {
        return ScoreResult::no_data();
    };
    let Some(speed) = positive(d.avg_bat_speed) else {
        return ScoreResult::no_data();
    };
    let adj = &t.adjustments;
    let std = &t.bat;

    let mut score = (speed / target) * 100.0;

    if d.bat_speed_sd.is_some_and(|sd| sd > std.speed_sd_excellent) {
        score *= adj.speed_sd_penalty;
    }

    let on_plane = d
        .attack_angle_avg
        .is_some_and(|aa| aa >= std.attack_angle_min && aa <= std.attack_angle_max);
    if !on_plane {
        score *= adj.attack_angle_penalty;
    }

    let score = score.min(adj.score_cap);
    let state = t.cutoffs.bat.classify(score);
    ScoreResult::classified(score, state, &BAT_LABELS)
}

pub fn ball_score(data: Option<&BallData>, target: f64, t: &Thresholds) -> ScoreResult {
    let Some(d) = data else {
        return ScoreResult::no_data();
    };
    let Some(ev90) = positive(d.ev90) else {
        return ScoreResult::no_data();
    };
    let adj = &t.adjustments;

    let mut score = (ev90 / target) * 100.0;

    if d.la_sd.is_some_and(|sd| sd > t.launch.sd_excellent) {
        score *= adj.la_sd_penalty;
    }
    if d
        .barrel_like_rate
        .is_some_and(|rate| rate > adj.barrel_bonus_min_rate)
    {
        score *= adj.barrel_bonus;
    }

    // Single clamp after both adjustments.
    let score = score.min(adj.score_cap);
    let state = t.cutoffs.ball.classify(score);
    ScoreResult::classified(score, state, &BALL_LABELS)
}

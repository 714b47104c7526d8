//! Stricter scoring for curated reference swings.
//!
//! Works from raw per-frame pose landmarks instead of pre-aggregated sensor
//! summaries, scores every intermediate metric on a four-step band
//! (100/80/60/40) and flags captures whose numbers look physically
//! implausible.

use super::ball_metrics::std_dev;
use super::pillars::mean_present;
use super::types::PlayerLevel;
use crate::config::{ModelThresholds, Thresholds, WeirdnessLimits};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

// === INPUT ===

/// Normalized image coordinates, y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn midpoint(a: Point2, b: Point2) -> Point2 {
        Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseFrame {
    pub frame: u32,
    pub nose: Option<Point2>,
    pub left_shoulder: Option<Point2>,
    pub right_shoulder: Option<Point2>,
    pub left_hip: Option<Point2>,
    pub right_hip: Option<Point2>,
    pub left_wrist: Option<Point2>,
    pub right_wrist: Option<Point2>,
}

impl PoseFrame {
    pub fn hip_mid(&self) -> Option<Point2> {
        Some(Point2::midpoint(self.left_hip?, self.right_hip?))
    }

    pub fn shoulder_mid(&self) -> Option<Point2> {
        Some(Point2::midpoint(self.left_shoulder?, self.right_shoulder?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatSummary {
    pub speed_mph: Option<f64>,
    pub attack_angle_deg: Option<f64>,
    pub time_in_zone_ms: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSummary {
    pub ev90: Option<f64>,
    pub la90: Option<f64>,
    pub hit_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct SwingCapture {
    #[builder(default)]
    pub level: PlayerLevel,
    #[builder(default)]
    pub frames: Vec<PoseFrame>,
    #[builder(default, setter(strip_option))]
    pub bat: Option<BatSummary>,
    #[builder(default, setter(strip_option))]
    pub ball: Option<BallSummary>,
}

// === OUTPUT ===

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub value: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceResult {
    pub score: f64,
    pub transitions: String,
    pub in_order: bool,
    /// Pelvis, torso, arm and bat event frame indices.
    pub event_frames: [usize; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatModelMetrics {
    pub speed: Option<MetricScore>,
    pub attack_angle: Option<MetricScore>,
    pub time_in_zone: Option<MetricScore>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallModelMetrics {
    pub ev90: Option<MetricScore>,
    pub la90: Option<MetricScore>,
    pub hit_rate: Option<MetricScore>,
    pub score: Option<f64>,
}

/// Raw pose-derived numbers, before banding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseMetrics {
    pub com_forward_pct: f64,
    pub head_movement_inches: f64,
    pub spine_angle_sd_deg: f64,
    pub sequence_score: f64,
    pub frame_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weirdness {
    pub com_out_of_range: bool,
    pub excessive_head_movement: bool,
    pub unstable_spine: bool,
    pub broken_sequence: bool,
    pub too_few_frames: bool,
}

impl Weirdness {
    pub fn has_any(&self) -> bool {
        self.com_out_of_range
            || self.excessive_head_movement
            || self.unstable_spine
            || self.broken_sequence
            || self.too_few_frames
    }

    pub fn triggered(&self) -> Vec<&'static str> {
        [
            (self.com_out_of_range, "COM shift out of range"),
            (self.excessive_head_movement, "Excessive head movement"),
            (self.unstable_spine, "Unstable spine angle"),
            (self.broken_sequence, "Kinematic sequence out of order"),
            (self.too_few_frames, "Too few pose frames"),
        ]
        .into_iter()
        .filter_map(|(hit, text)| hit.then_some(text))
        .collect()
    }

    pub fn message(&self) -> String {
        self.triggered().join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebootMetrics {
    pub level: PlayerLevel,
    pub frame_count: usize,
    pub com_forward: MetricScore,
    pub head_movement: MetricScore,
    pub spine_stability: MetricScore,
    pub sequence: SequenceResult,
    pub body_score: f64,
    pub bat: Option<BatModelMetrics>,
    pub ball: Option<BallModelMetrics>,
    pub weirdness: Weirdness,
    pub weirdness_message: Option<String>,
}

// === POSE METRICS ===

/// Forward shift of the hip midpoint, as a percentage of frame width.
pub fn compute_com_forward(frames: &[PoseFrame], m: &ModelThresholds) -> f64 {
    if frames.len() < m.min_frames {
        return 0.0;
    }
    let xs: Vec<f64> = frames
        .iter()
        .filter_map(PoseFrame::hip_mid)
        .map(|p| p.x)
        .collect();
    if xs.len() < 2 {
        return 0.0;
    }

    let first = xs[0];
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (max - first) * 100.0
}

/// Largest deviation of the nose from its mean height, in inches.
pub fn compute_head_movement(frames: &[PoseFrame], m: &ModelThresholds) -> f64 {
    if frames.len() < m.min_frames {
        return 0.0;
    }
    let ys: Vec<f64> = frames.iter().filter_map(|f| f.nose).map(|p| p.y).collect();
    if ys.is_empty() {
        return 0.0;
    }

    let mean = ys.iter().sum::<f64>() / ys.len() as f64;
    let max_dev = ys.iter().map(|y| (y - mean).abs()).fold(0.0, f64::max);
    max_dev * m.head_inches_scale
}

/// Standard deviation of the hip-to-shoulder line angle, in degrees.
pub fn compute_spine_stability(frames: &[PoseFrame], m: &ModelThresholds) -> f64 {
    if frames.len() < m.min_frames {
        return 0.0;
    }
    let angles: Vec<f64> = frames
        .iter()
        .filter_map(|f| {
            let s = f.shoulder_mid()?;
            let h = f.hip_mid()?;
            Some((s.y - h.y).atan2(s.x - h.x).to_degrees())
        })
        .collect();
    if angles.len() < 2 {
        return 0.0;
    }
    std_dev(&angles)
}

/// Places the pelvis, torso, arm and bat events at fixed fractions of the
/// capture and checks they fire proximal to distal.
///
/// This is an approximation: the events are not located from peak segment
/// velocities, so any capture with enough frames comes out in order. Replace
/// this once per-segment angular velocity is available.
pub fn compute_sequence_correctness(frames: &[PoseFrame], m: &ModelThresholds) -> SequenceResult {
    let n = frames.len();
    if n < m.min_frames {
        return SequenceResult {
            score: 0.0,
            transitions: "0/3 transitions correct".to_string(),
            in_order: false,
            event_frames: [0; 4],
        };
    }

    let event_frames = m
        .sequence_offsets
        .map(|offset| ((n as f64 * offset).floor() as usize).min(n - 1));
    let in_order = event_frames.windows(2).all(|w| w[0] < w[1]);

    SequenceResult {
        score: if in_order { 100.0 } else { 50.0 },
        transitions: if in_order {
            "3/3 transitions correct".to_string()
        } else {
            "0/3 transitions correct".to_string()
        },
        in_order,
        event_frames,
    }
}

pub fn compute_pose_metrics(frames: &[PoseFrame], m: &ModelThresholds) -> PoseMetrics {
    PoseMetrics {
        com_forward_pct: compute_com_forward(frames, m),
        head_movement_inches: compute_head_movement(frames, m),
        spine_angle_sd_deg: compute_spine_stability(frames, m),
        sequence_score: compute_sequence_correctness(frames, m).score,
        frame_count: frames.len(),
    }
}

// === WEIRDNESS ===

pub fn detect_weirdness(p: &PoseMetrics, limits: &WeirdnessLimits, min_frames: usize) -> Weirdness {
    Weirdness {
        com_out_of_range: p.com_forward_pct < limits.com_min_pct
            || p.com_forward_pct > limits.com_max_pct,
        excessive_head_movement: p.head_movement_inches > limits.head_max_inches,
        unstable_spine: p.spine_angle_sd_deg > limits.spine_sd_max_deg,
        broken_sequence: p.sequence_score < limits.sequence_min_score,
        too_few_frames: p.frame_count < min_frames,
    }
}

// === BAT / BALL ===

fn banded(value: Option<f64>, scale: impl Fn(f64) -> f64) -> Option<MetricScore> {
    value
        .filter(|v| !v.is_nan())
        .map(|value| MetricScore {
            value,
            score: scale(value),
        })
}

fn composite(parts: &[Option<MetricScore>]) -> Option<f64> {
    mean_present(parts.iter().map(|p| p.map(|s| s.score)))
}

pub fn score_model_bat(
    bat: &BatSummary,
    level: PlayerLevel,
    t: &Thresholds,
    m: &ModelThresholds,
) -> BatModelMetrics {
    let target = t.bat_speed_targets.get(level);
    let speed = banded(bat.speed_mph.filter(|&v| v > 0.0), |v| {
        m.target_ratio.score(v / target)
    });
    let attack_angle = banded(bat.attack_angle_deg, |v| m.attack_angle_deg.score(v));
    let time_in_zone = banded(bat.time_in_zone_ms, |v| m.time_in_zone_ms.score(v));

    let score = composite(&[speed, attack_angle, time_in_zone]);
    BatModelMetrics {
        speed,
        attack_angle,
        time_in_zone,
        score,
    }
}

pub fn score_model_ball(
    ball: &BallSummary,
    level: PlayerLevel,
    t: &Thresholds,
    m: &ModelThresholds,
) -> BallModelMetrics {
    let target = t.ev90_targets.get(level);
    let ev90 = banded(ball.ev90.filter(|&v| v > 0.0), |v| {
        m.target_ratio.score(v / target)
    });
    let la90 = banded(ball.la90, |v| m.la90_deg.score(v));
    let hit_rate = banded(ball.hit_rate, |v| m.hit_rate.score(v));

    let score = composite(&[ev90, la90, hit_rate]);
    BallModelMetrics {
        ev90,
        la90,
        hit_rate,
        score,
    }
}

// === COMBINED ===

pub fn compute_reboot_metrics(
    capture: &SwingCapture,
    t: &Thresholds,
    m: &ModelThresholds,
) -> RebootMetrics {
    let frames = &capture.frames;
    let pose = compute_pose_metrics(frames, m);
    let sequence = compute_sequence_correctness(frames, m);

    debug!(
        "Pose metrics: frames={} com={:.2}% head={:.2}in spine_sd={:.2}deg seq={}",
        pose.frame_count,
        pose.com_forward_pct,
        pose.head_movement_inches,
        pose.spine_angle_sd_deg,
        sequence.score
    );

    let com_forward = MetricScore {
        value: pose.com_forward_pct,
        score: m.com_forward_pct.score(pose.com_forward_pct),
    };
    let head_movement = MetricScore {
        value: pose.head_movement_inches,
        score: m.head_movement_inches.score(pose.head_movement_inches),
    };
    let spine_stability = MetricScore {
        value: pose.spine_angle_sd_deg,
        score: m.spine_angle_sd_deg.score(pose.spine_angle_sd_deg),
    };
    let body_score =
        (com_forward.score + head_movement.score + spine_stability.score + sequence.score) / 4.0;

    let weirdness = detect_weirdness(&pose, &m.weirdness, m.min_frames);
    let weirdness_message = weirdness.has_any().then(|| weirdness.message());
    if let Some(msg) = &weirdness_message {
        warn!("Swing capture flagged: {}", msg);
    }

    RebootMetrics {
        level: capture.level,
        frame_count: pose.frame_count,
        com_forward,
        head_movement,
        spine_stability,
        sequence,
        body_score,
        bat: capture
            .bat
            .as_ref()
            .map(|b| score_model_bat(b, capture.level, t, m)),
        ball: capture
            .ball
            .as_ref()
            .map(|b| score_model_ball(b, capture.level, t, m)),
        weirdness,
        weirdness_message,
    }
}

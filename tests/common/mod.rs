#![allow(dead_code)]

use fourb::scorer::model::{Point2, PoseFrame};

/// Builder for PoseFrame to keep landmark-heavy tests readable.
pub struct FrameBuilder {
    frame: PoseFrame,
}

impl FrameBuilder {
    pub fn new(index: u32) -> Self {
        Self {
            frame: PoseFrame {
                frame: index,
                ..Default::default()
            },
        }
    }

    pub fn hips(mut self, mid_x: f64, y: f64) -> Self {
        self.frame.left_hip = Some(Point2::new(mid_x - 0.05, y));
        self.frame.right_hip = Some(Point2::new(mid_x + 0.05, y));
        self
    }

    pub fn shoulders(mut self, mid_x: f64, y: f64) -> Self {
        self.frame.left_shoulder = Some(Point2::new(mid_x - 0.08, y));
        self.frame.right_shoulder = Some(Point2::new(mid_x + 0.08, y));
        self
    }

    pub fn nose(mut self, x: f64, y: f64) -> Self {
        self.frame.nose = Some(Point2::new(x, y));
        self
    }

    pub fn build(self) -> PoseFrame {
        self.frame
    }
}

/// A quiet, upright swing: hips drift forward by `com_shift` (normalized
/// width) across the capture, head and spine stay still.
pub fn steady_swing(n: usize, com_shift: f64) -> Vec<PoseFrame> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            let hip_x = 0.40 + com_shift * t;
            FrameBuilder::new(i as u32)
                .hips(hip_x, 0.60)
                .shoulders(hip_x, 0.30)
                .nose(hip_x, 0.15)
                .build()
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

use criterion::{criterion_group, criterion_main, Criterion};
use fourb::scorer::model::{BatSummary, Point2, PoseFrame, SwingCapture};
use fourb::scorer::{BallData, BatData, BodyData, BrainData, PlayerLevel, PlayerRecord, Scorer};
use std::hint::black_box;

fn synthetic_records(n: usize, rng: &mut fastrand::Rng) -> Vec<PlayerRecord> {
    (0..n)
        .map(|i| PlayerRecord {
            name: Some(format!("player_{}", i)),
            level: PlayerLevel::Hs,
            brain: Some(BrainData {
                overall_percentile: Some(rng.f64() * 100.0),
                ..Default::default()
            }),
            body: Some(BodyData {
                com_forward_movement_pct: Some(rng.f64() * 50.0),
                spine_stability_score: Some(50.0 + rng.f64() * 50.0),
                spine_angle_var_deg: Some(rng.f64() * 12.0),
                head_movement_inches: Some(rng.f64() * 8.0),
            }),
            bat: Some(BatData {
                avg_bat_speed: Some(50.0 + rng.f64() * 30.0),
                bat_speed_sd: Some(rng.f64() * 6.0),
                attack_angle_avg: Some(rng.f64() * 25.0),
                attack_angle_sd: None,
            }),
            ball: Some(BallData {
                ev90: Some(70.0 + rng.f64() * 40.0),
                la90: Some(rng.f64() * 35.0),
                la_sd: Some(rng.f64() * 12.0),
                barrel_like_rate: Some(rng.f64()),
            }),
        })
        .collect()
}

fn synthetic_capture(n: u32, rng: &mut fastrand::Rng) -> SwingCapture {
    let frames = (0..n)
        .map(|i| {
            let x = 0.40 + 0.2 * i as f64 / n as f64 + (rng.f64() - 0.5) * 0.01;
            PoseFrame {
                frame: i,
                nose: Some(Point2::new(x, 0.15 + (rng.f64() - 0.5) * 0.01)),
                left_shoulder: Some(Point2::new(x - 0.08, 0.30)),
                right_shoulder: Some(Point2::new(x + 0.08, 0.30)),
                left_hip: Some(Point2::new(x - 0.05, 0.60)),
                right_hip: Some(Point2::new(x + 0.05, 0.60)),
                ..Default::default()
            }
        })
        .collect();

    SwingCapture::builder()
        .level(PlayerLevel::College)
        .frames(frames)
        .bat(BatSummary {
            speed_mph: Some(71.0),
            attack_angle_deg: Some(12.0),
            time_in_zone_ms: Some(140.0),
        })
        .build()
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();
    let mut rng = fastrand::Rng::with_seed(42);

    let records = synthetic_records(1000, &mut rng);
    c.bench_function("score_player (1k records)", |b| {
        b.iter(|| {
            for r in &records {
                black_box(scorer.score_player(black_box(r)));
            }
        })
    });

    let ev: Vec<f64> = (0..500).map(|_| 60.0 + rng.f64() * 50.0).collect();
    let la: Vec<f64> = (0..500).map(|_| -10.0 + rng.f64() * 50.0).collect();
    c.bench_function("derive_ball_data (500 swings)", |b| {
        b.iter(|| scorer.derive_ball_data(black_box(&ev), black_box(&la)))
    });

    let capture = synthetic_capture(240, &mut rng);
    c.bench_function("reboot_metrics (240 frames)", |b| {
        b.iter(|| scorer.reboot_metrics(black_box(&capture)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

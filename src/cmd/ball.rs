use crate::reports;
use clap::Args;
use fourb::error::FbResult;
use fourb::loader::load_ball_samples;
use fourb::scorer::{PlayerLevel, Scorer};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BallArgs {
    /// CSV with exit_velocity and launch_angle columns.
    pub samples: PathBuf,

    #[arg(short, long, default_value = "Other")]
    pub level: String,
}

pub fn run(args: BallArgs, scorer: &Scorer, json: bool) -> FbResult<()> {
    info!("📂 Loading batted balls: {}", args.samples.display());
    let samples = load_ball_samples(&args.samples)?;
    if samples.is_empty() {
        warn!("⚠️  No usable batted-ball rows in {}", args.samples.display());
    }

    let level = PlayerLevel::parse(&args.level);
    let data = scorer.derive_ball_data(&samples.exit_velocities, &samples.launch_angles);
    let result = scorer.ball(Some(&data), level);

    if json {
        let out = json!({
            "samples": samples.len(),
            "level": level,
            "ball": data,
            "score": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_ball_report(samples.len(), level, &data, &result);
    }
    Ok(())
}

use crate::reports;
use clap::Args;
use fourb::error::FbResult;
use fourb::loader::load_swing_capture;
use fourb::scorer::{PlayerLevel, Scorer};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SwingArgs {
    /// Pose capture with optional bat/ball summaries (JSON).
    pub input: PathBuf,

    /// Overrides the level stored in the capture.
    #[arg(short, long)]
    pub level: Option<String>,
}

pub fn run(args: SwingArgs, scorer: &Scorer, json: bool) -> FbResult<()> {
    info!("📂 Loading swing capture: {}", args.input.display());
    let mut capture = load_swing_capture(&args.input)?;
    if let Some(level) = &args.level {
        capture.level = PlayerLevel::parse(level);
    }

    let metrics = scorer.reboot_metrics(&capture);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        reports::print_reboot_report(&metrics);
    }
    Ok(())
}

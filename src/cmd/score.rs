use crate::reports;
use clap::Args;
use fourb::error::FbResult;
use fourb::loader::load_player;
use fourb::scorer::{PlayerLevel, Scorer};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Player record (JSON).
    pub input: PathBuf,

    /// Overrides the level stored in the record.
    #[arg(short, long)]
    pub level: Option<String>,
}

pub fn run(args: ScoreArgs, scorer: &Scorer, json: bool) -> FbResult<()> {
    info!("📂 Loading player: {}", args.input.display());
    let mut record = load_player(&args.input)?;
    if let Some(level) = &args.level {
        record.level = PlayerLevel::parse(level);
    }

    let report = scorer.score_player(&record);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_player_report(&report);
    }
    Ok(())
}

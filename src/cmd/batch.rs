use crate::reports;
use clap::Args;
use fourb::error::FbResult;
use fourb::loader::load_players;
use fourb::scorer::{PlayerReport, Scorer};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Array of player records (JSON).
    pub input: PathBuf,

    /// Only show the top N players.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// Highest overall first, players without any data last.
fn by_overall(a: &PlayerReport, b: &PlayerReport) -> Ordering {
    match (a.summary.overall_score, b.summary.overall_score) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn run(args: BatchArgs, scorer: &Scorer, json: bool) -> FbResult<()> {
    let records = load_players(&args.input)?;
    info!("📂 Scoring {} players from {}", records.len(), args.input.display());

    let mut results: Vec<PlayerReport> = records
        .par_iter()
        .map(|record| scorer.score_player(record))
        .collect();

    results.sort_by(by_overall);
    if let Some(n) = args.top {
        results.truncate(n);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No player records found.");
    } else {
        reports::print_batch_ranking(&results);
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use fourb::config::{Config, CutoffOverrides};
use fourb::error::FbResult;
use fourb::scorer::Scorer;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "4B swing scoring engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file overriding the built-in thresholds.
    #[arg(global = true, long)]
    config: Option<String>,

    /// Print machine-readable JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    cutoffs: CutoffOverrides,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one player record.
    Score(cmd::score::ScoreArgs),
    /// Score and rank many player records.
    Batch(cmd::batch::BatchArgs),
    /// Run the model-swing metrics on a pose capture.
    Swing(cmd::swing::SwingArgs),
    /// Derive ball metrics from raw batted-ball samples.
    Ball(cmd::ball::BallArgs),
}

fn build_scorer(cli: &Cli) -> FbResult<Scorer> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading thresholds from: {}", path);
            Config::load_from_file(path)?
        }
        None => {
            if cli.debug {
                warn!("⚠️  No threshold file given. Using embedded defaults.");
            }
            Config::default()
        }
    };
    config.merge_from_cli(&cli.cutoffs)?;
    Ok(Scorer::new(config))
}

fn run(cli: Cli) -> FbResult<()> {
    let scorer = build_scorer(&cli)?;

    match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer, cli.json),
        Commands::Batch(args) => cmd::batch::run(args, &scorer, cli.json),
        Commands::Swing(args) => cmd::swing::run(args, &scorer, cli.json),
        Commands::Ball(args) => cmd::ball::run(args, &scorer, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

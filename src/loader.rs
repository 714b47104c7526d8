use crate::error::{FbResult, FourBError};
use crate::scorer::model::SwingCapture;
use crate::scorer::types::PlayerRecord;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Paired per-swing batted-ball samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallSamples {
    pub exit_velocities: Vec<f64>,
    pub launch_angles: Vec<f64>,
}

impl BallSamples {
    pub fn len(&self) -> usize {
        self.exit_velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exit_velocities.is_empty()
    }
}

const EV_HEADERS: [&str; 4] = ["exit_velocity", "exit_velo", "ev", "exitspeed"];
const LA_HEADERS: [&str; 3] = ["launch_angle", "la", "angle"];

fn find_column(headers: &csv::StringRecord, names: &[&str], fallback: usize) -> usize {
    headers
        .iter()
        .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        .unwrap_or(fallback)
}

/// Reads `exit_velocity,launch_angle` rows. Rows where either value does
/// not parse as a finite number are skipped so the two columns stay paired.
pub fn read_ball_samples<R: Read>(reader: R) -> FbResult<BallSamples> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let ev_col = find_column(&headers, &EV_HEADERS, 0);
    let la_col = find_column(&headers, &LA_HEADERS, 1);
    if ev_col == la_col {
        return Err(FourBError::Validation(
            "exit velocity and launch angle resolve to the same column".to_string(),
        ));
    }

    let mut samples = BallSamples::default();
    let mut skipped = 0usize;

    for record in rdr.records() {
        let record = record?;
        let parse = |col: usize| {
            record
                .get(col)
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        match (parse(ev_col), parse(la_col)) {
            (Some(ev), Some(la)) => {
                samples.exit_velocities.push(ev);
                samples.launch_angles.push(la);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} unparseable batted-ball rows", skipped);
    }
    debug!("Loaded {} batted-ball samples", samples.len());
    Ok(samples)
}

pub fn load_ball_samples<P: AsRef<Path>>(path: P) -> FbResult<BallSamples> {
    let file = File::open(path)?;
    read_ball_samples(file)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<PlayerRecord>),
    One(Box<PlayerRecord>),
}

/// Accepts either a single player object or an array of them.
pub fn parse_players(json: &str) -> FbResult<Vec<PlayerRecord>> {
    let players = match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(list) => list,
        OneOrMany::One(record) => vec![*record],
    };
    debug!("Parsed {} player records", players.len());
    Ok(players)
}

pub fn load_players<P: AsRef<Path>>(path: P) -> FbResult<Vec<PlayerRecord>> {
    let content = fs::read_to_string(path)?;
    parse_players(&content)
}

pub fn load_player<P: AsRef<Path>>(path: P) -> FbResult<PlayerRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_swing_capture<P: AsRef<Path>>(path: P) -> FbResult<SwingCapture> {
    let content = fs::read_to_string(path)?;
    let capture: SwingCapture = serde_json::from_str(&content)?;
    debug!(
        "Loaded swing capture: level={} frames={}",
        capture.level,
        capture.frames.len()
    );
    Ok(capture)
}

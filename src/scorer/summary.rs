use super::tiers::StateCutoffs;
use super::types::{FourBSummary, Pillar, PillarScores, TileState, NO_DATA_LABEL, OVERALL_LABELS};

pub fn four_b_summary(scores: &PillarScores, cutoffs: &StateCutoffs) -> FourBSummary {
    let mut present: Vec<(Pillar, f64)> = scores
        .entries()
        .into_iter()
        .filter_map(|(pillar, score)| score.map(|s| (pillar, s)))
        .collect();

    if present.is_empty() {
        return FourBSummary {
            overall_score: None,
            overall_state: TileState::NoData,
            overall_label: NO_DATA_LABEL.to_string(),
            strongest_area: None,
            focus_area: None,
        };
    }

    let overall = present.iter().map(|(_, s)| s).sum::<f64>() / present.len() as f64;
    let state = cutoffs.classify(overall);

    // Stable: ties keep Brain, Body, Bat, Ball order.
    present.sort_by(|a, b| b.1.total_cmp(&a.1));

    FourBSummary {
        overall_score: Some(overall),
        overall_state: state,
        overall_label: OVERALL_LABELS.for_state(state).to_string(),
        strongest_area: present.first().map(|&(p, _)| p),
        focus_area: present.last().map(|&(p, _)| p),
    }
}

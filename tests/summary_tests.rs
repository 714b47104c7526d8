use fourb::config::Config;
use fourb::scorer::{
    calculate_four_b_summary, BodyData, BrainData, Pillar, PillarScores, PlayerLevel,
    PlayerRecord, Scorer, TileState,
};
use rstest::rstest;

#[test]
fn test_partial_scores_average_only_present() {
    let scores = PillarScores {
        brain: Some(80.0),
        body: None,
        bat: None,
        ball: Some(60.0),
    };
    let s = calculate_four_b_summary(&scores);
    assert_eq!(s.overall_score, Some(70.0));
    assert_eq!(s.overall_state, TileState::Developing);
    assert_eq!(s.overall_label, "4B Developing");
    assert_eq!(s.strongest_area, Some(Pillar::Brain));
    assert_eq!(s.focus_area, Some(Pillar::Ball));
}

#[test]
fn test_empty_summary_is_no_data() {
    let s = calculate_four_b_summary(&PillarScores::default());
    assert_eq!(s.overall_score, None);
    assert_eq!(s.overall_state, TileState::NoData);
    assert_eq!(s.strongest_area, None);
    assert_eq!(s.focus_area, None);
}

#[test]
fn test_single_pillar_is_both_areas() {
    let scores = PillarScores {
        bat: Some(91.0),
        ..Default::default()
    };
    let s = calculate_four_b_summary(&scores);
    assert_eq!(s.overall_score, Some(91.0));
    assert_eq!(s.overall_label, "4B Synced");
    assert_eq!(s.strongest_area, Some(Pillar::Bat));
    assert_eq!(s.focus_area, Some(Pillar::Bat));
}

#[test]
fn test_ties_keep_pillar_order() {
    let scores = PillarScores {
        brain: Some(70.0),
        body: Some(70.0),
        bat: Some(70.0),
        ball: Some(70.0),
    };
    let s = calculate_four_b_summary(&scores);
    assert_eq!(s.strongest_area, Some(Pillar::Brain));
    assert_eq!(s.focus_area, Some(Pillar::Ball));
}

#[rstest]
#[case(80.0, TileState::Synced, "4B Synced")]
#[case(79.99, TileState::Developing, "4B Developing")]
#[case(60.0, TileState::Developing, "4B Developing")]
#[case(59.99, TileState::Limiting, "4B Out of Sync")]
fn test_overall_boundaries(#[case] score: f64, #[case] state: TileState, #[case] label: &str) {
    let s = calculate_four_b_summary(&PillarScores {
        body: Some(score),
        ..Default::default()
    });
    assert_eq!(s.overall_state, state);
    assert_eq!(s.overall_label, label);
}

#[test]
fn test_summary_serializes_camel_case() {
    let s = calculate_four_b_summary(&PillarScores {
        brain: Some(90.0),
        ..Default::default()
    });
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["overallState"], "synced");
    assert_eq!(json["strongestArea"], "Brain");

    let empty = serde_json::to_value(calculate_four_b_summary(&PillarScores::default())).unwrap();
    assert_eq!(empty["overallState"], "no-data");
    assert!(empty["focusArea"].is_null());
}

#[test]
fn test_score_player_end_to_end() {
    let record = PlayerRecord {
        name: Some("Test Player".to_string()),
        level: PlayerLevel::Hs,
        brain: Some(BrainData {
            processing_speed: Some(60.0),
            tracking_focus: Some(50.0),
            overall_percentile: Some(55.0),
            ..Default::default()
        }),
        body: Some(BodyData {
            com_forward_movement_pct: Some(18.0),
            spine_stability_score: Some(90.0),
            spine_angle_var_deg: Some(4.0),
            head_movement_inches: Some(2.0),
        }),
        bat: None,
        ball: None,
    };

    let report = Scorer::new(Config::default()).score_player(&record);
    assert_eq!(report.brain.score, Some(55.0));
    assert_eq!(report.body.score, Some(100.0));
    assert_eq!(report.bat.state, TileState::NoData);
    assert_eq!(report.summary.overall_score, Some(77.5));
    assert_eq!(report.summary.strongest_area, Some(Pillar::Body));
    assert_eq!(report.summary.focus_area, Some(Pillar::Brain));
}

use fourb::config::{Config, CutoffOverrides, LevelTable};
use fourb::error::FourBError;
use fourb::scorer::{BatData, PlayerLevel, Scorer, TileState};
use rstest::rstest;
use std::fs;
use strum::IntoEnumIterator;

#[rstest]
#[case("HS (14-18)", PlayerLevel::Hs)]
#[case("HS", PlayerLevel::Hs)]
#[case("high school", PlayerLevel::Hs)]
#[case("MLB", PlayerLevel::Pro)]
#[case("Pro", PlayerLevel::Pro)]
#[case("College", PlayerLevel::College)]
#[case("Youth (<14)", PlayerLevel::Youth)]
#[case("Other", PlayerLevel::Other)]
#[case("Beer League", PlayerLevel::Other)]
#[case("", PlayerLevel::Other)]
fn test_level_parsing(#[case] raw: &str, #[case] expected: PlayerLevel) {
    assert_eq!(PlayerLevel::parse(raw), expected);
}

#[test]
fn test_level_display_round_trips() {
    for level in PlayerLevel::iter() {
        assert_eq!(PlayerLevel::parse(&level.to_string()), level);
    }
}

#[test]
fn test_every_level_has_targets() {
    let t = Config::default().thresholds;
    for level in PlayerLevel::iter() {
        assert!(t.bat_speed_targets.get(level) > 0.0);
        assert!(t.ev90_targets.get(level) > 0.0);
    }
    assert_eq!(t.bat_speed_targets.get(PlayerLevel::Hs), 68.0);
}

#[test]
fn test_defaults_validate() {
    Config::default().validate().expect("default config must be valid");
}

#[test]
fn test_load_partial_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thresholds.json");
    fs::write(
        &path,
        r#"{
            "thresholds": {
                "bat_speed_targets": { "youth": 50, "hs": 60, "college": 70, "pro": 80, "other": 60 }
            }
        }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.thresholds.bat_speed_targets.get(PlayerLevel::Hs), 60.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.thresholds.cutoffs.body.synced, 85.0);
    assert_eq!(config.model.min_frames, 8);

    let bat = BatData {
        avg_bat_speed: Some(60.0),
        attack_angle_avg: Some(12.0),
        ..Default::default()
    };
    let r = Scorer::new(config).bat(Some(&bat), PlayerLevel::Hs);
    assert_eq!(r.score, Some(100.0));
}

#[test]
fn test_zero_target_rejected() {
    let mut config = Config::default();
    config.thresholds.ev90_targets = LevelTable {
        youth: 75.0,
        hs: 0.0,
        college: 95.0,
        pro: 103.0,
        other: 85.0,
    };
    assert!(matches!(config.validate(), Err(FourBError::Validation(_))));
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("full.json");
    let original = Config::default();
    fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, FourBError::Io(_)));
}

#[test]
fn test_bad_json_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(FourBError::Json(_))
    ));
}

#[test]
fn test_cli_overrides_apply() {
    let mut config = Config::default();
    let overrides = CutoffOverrides {
        body_synced: Some(95.0),
        ..Default::default()
    };
    config.merge_from_cli(&overrides).unwrap();
    assert_eq!(config.thresholds.cutoffs.body.synced, 95.0);
    assert_eq!(config.thresholds.cutoffs.body.developing, 65.0);

    let body = fourb::scorer::BodyData {
        spine_stability_score: Some(90.0),
        ..Default::default()
    };
    // 100 >= 95 still synced; a 75 would now be developing.
    assert_eq!(
        Scorer::new(config).body(Some(&body)).state,
        TileState::Synced
    );
}

#[test]
fn test_inverted_override_rejected() {
    let mut config = Config::default();
    let overrides = CutoffOverrides {
        bat_synced: Some(50.0),
        ..Default::default()
    };
    assert!(config.merge_from_cli(&overrides).is_err());
}

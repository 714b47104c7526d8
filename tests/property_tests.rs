use fourb::scorer::{
    calculate_ball_score, calculate_bat_score, calculate_four_b_summary, BallData, BatData,
    PillarScores, PlayerLevel, TileState,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_level() -> impl Strategy<Value = PlayerLevel> {
    prop::sample::select(PlayerLevel::iter().collect::<Vec<_>>())
}

prop_compose! {
    fn arb_bat()(
        speed in 1.0..120.0f64,
        sd in prop::option::of(0.0..10.0f64),
        aa in prop::option::of(-10.0..40.0f64)
    ) -> BatData {
        BatData {
            avg_bat_speed: Some(speed),
            bat_speed_sd: sd,
            attack_angle_avg: aa,
            attack_angle_sd: None,
        }
    }
}

prop_compose! {
    fn arb_ball()(
        ev90 in 1.0..140.0f64,
        la_sd in prop::option::of(0.0..20.0f64),
        rate in prop::option::of(0.0..1.0f64)
    ) -> BallData {
        BallData {
            ev90: Some(ev90),
            la90: None,
            la_sd,
            barrel_like_rate: rate,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_bat_never_exceeds_cap(bat in arb_bat(), level in arb_level()) {
        let r = calculate_bat_score(Some(&bat), level);
        let score = r.score.unwrap();
        prop_assert!(score <= 100.0);
        prop_assert!(score > 0.0);
    }

    #[test]
    fn test_ball_never_exceeds_cap(ball in arb_ball(), level in arb_level()) {
        let r = calculate_ball_score(Some(&ball), level);
        prop_assert!(r.score.unwrap() <= 100.0);
    }

    #[test]
    fn test_bat_monotonic_in_speed(bat in arb_bat(), level in arb_level(), bump in 0.0..30.0f64) {
        let faster = BatData {
            avg_bat_speed: bat.avg_bat_speed.map(|s| s + bump),
            ..bat.clone()
        };
        let a = calculate_bat_score(Some(&bat), level).score.unwrap();
        let b = calculate_bat_score(Some(&faster), level).score.unwrap();
        prop_assert!(b >= a);
    }

    #[test]
    fn test_ball_monotonic_in_ev90(ball in arb_ball(), level in arb_level(), bump in 0.0..30.0f64) {
        let harder = BallData {
            ev90: ball.ev90.map(|e| e + bump),
            ..ball.clone()
        };
        let a = calculate_ball_score(Some(&ball), level).score.unwrap();
        let b = calculate_ball_score(Some(&harder), level).score.unwrap();
        prop_assert!(b >= a);
    }

    #[test]
    fn test_state_matches_presence(bat in prop::option::of(arb_bat()), level in arb_level()) {
        let r = calculate_bat_score(bat.as_ref(), level);
        prop_assert_eq!(r.score.is_none(), r.state == TileState::NoData);
    }

    #[test]
    fn test_summary_between_min_and_max(
        brain in prop::option::of(0.0..100.0f64),
        body in prop::option::of(0.0..100.0f64),
        bat in prop::option::of(0.0..100.0f64),
        ball in prop::option::of(0.0..100.0f64)
    ) {
        let scores = PillarScores { brain, body, bat, ball };
        let s = calculate_four_b_summary(&scores);
        let present: Vec<f64> = [brain, body, bat, ball].into_iter().flatten().collect();

        match s.overall_score {
            None => {
                prop_assert!(present.is_empty());
                prop_assert!(s.strongest_area.is_none());
            }
            Some(overall) => {
                let lo = present.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(overall >= lo - 1e-9 && overall <= hi + 1e-9);
                prop_assert!(s.strongest_area.is_some() && s.focus_area.is_some());
            }
        }
    }
}

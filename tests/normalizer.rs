use scorebot::model::{FavoredSide, NormalizedPrediction};
use scorebot::normalizer::{
    AWAY_SCORE_KEYS, HOME_SCORE_KEYS, HOME_WIN_PROB_KEYS, POINT_DIFF_KEYS, favored_side, normalize,
};
use serde_json::{Map, Value, json};

#[test]
fn each_field_is_absent_when_all_candidates_are_null() {
    let mut raw = Map::new();
    for key in HOME_SCORE_KEYS
        .iter()
        .chain(AWAY_SCORE_KEYS)
        .chain(HOME_WIN_PROB_KEYS)
        .chain(POINT_DIFF_KEYS)
    {
        raw.insert(key.to_string(), Value::Null);
    }
    assert_eq!(normalize(&Value::Object(raw)), NormalizedPrediction::default());
}

#[test]
fn every_candidate_is_recognized_on_its_own() {
    let cases: [(&[&str], fn(&NormalizedPrediction) -> Option<f64>); 4] = [
        (HOME_SCORE_KEYS, |p| p.home_score),
        (AWAY_SCORE_KEYS, |p| p.away_score),
        (HOME_WIN_PROB_KEYS, |p| p.home_win_probability),
        (POINT_DIFF_KEYS, |p| p.predicted_point_diff),
    ];
    for (keys, pick) in cases {
        for key in keys {
            let mut raw = Map::new();
            raw.insert(key.to_string(), json!(0.25));
            assert_eq!(pick(&normalize(&Value::Object(raw))), Some(0.25), "key {}", key);
        }
    }
}

#[test]
fn lowest_priority_candidates_are_used_when_alone() {
    let p = normalize(&json!({
        "home_points": 31,
        "away_points": 28,
        "home_win_probability": 0.55
    }));
    assert_eq!(p.home_score, Some(31.0));
    assert_eq!(p.away_score, Some(28.0));
    assert_eq!(p.home_win_probability, Some(0.55));
    assert_eq!(p.predicted_point_diff, None);
}

#[test]
fn win_prob_priority_order() {
    let p = normalize(&json!({
        "home_win_probability": 0.1,
        "win_prob_home": 0.2,
        "home_win_prob": 0.3
    }));
    assert_eq!(p.home_win_probability, Some(0.3));

    let p = normalize(&json!({ "home_win_probability": 0.1, "win_prob_home": 0.2 }));
    assert_eq!(p.home_win_probability, Some(0.2));
}

#[test]
fn unrecognized_keys_do_not_change_output() {
    let base = json!({ "home_win_probability": 0.642, "predicted_point_diff": -2.5 });
    let noisy = json!({
        "home_win_probability": 0.642,
        "predicted_point_diff": -2.5,
        "predicted_winner": "BUF",
        "model_type": "gboost",
        "neutral_site": true,
        "debug": { "features": [1, 2, 3] },
        "HOME_SCORE": 99
    });
    assert_eq!(normalize(&base), normalize(&noisy));
}

#[test]
fn spread_favors_away_side() {
    let p = normalize(&json!({ "home_win_probability": 0.642, "predicted_point_diff": -2.5 }));
    assert_eq!(p.home_win_probability, Some(0.642));
    assert_eq!(p.predicted_point_diff, Some(-2.5));
    assert_eq!(p.home_score, None);
    assert_eq!(p.away_score, None);
    assert_eq!(p.favored_side(), Some(FavoredSide::Away));
}

#[test]
fn favored_side_needs_a_diff() {
    assert_eq!(normalize(&json!({ "home_score": 21 })).favored_side(), None);
    assert_eq!(favored_side(0.0), FavoredSide::Home);
}

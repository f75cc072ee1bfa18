use crate::model::{FavoredSide, NormalizedPrediction};
use serde_json::{Map, Value};
use tracing::debug;

/// Accepted response keys per output field, highest priority first.
pub const HOME_SCORE_KEYS: &[&str] = &["home_score", "predicted_home_score", "home_points"];
pub const AWAY_SCORE_KEYS: &[&str] = &["away_score", "predicted_away_score", "away_points"];
pub const HOME_WIN_PROB_KEYS: &[&str] =
    &["home_win_prob", "win_prob_home", "home_win_probability"];
pub const POINT_DIFF_KEYS: &[&str] = &["predicted_point_diff"];

/// Returns the key and value of the first candidate that is present and not null.
pub fn first_present<'a>(
    raw: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|&key| raw.get(key).filter(|v| !v.is_null()).map(|v| (key, v)))
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn resolve(raw: &Map<String, Value>, keys: &[&'static str]) -> Option<f64> {
    let (key, value) = first_present(raw, keys)?;
    let number = as_number(value);
    if number.is_none() {
        debug!("Ignoring non-numeric value for '{}': {}", key, value);
    }
    number
}

/// Builds the canonical record from whatever the service returned.
///
/// The first present candidate decides each field. When that value is neither a number,
/// a numeric string nor a boolean, the field is left absent even though a key was
/// present, since the record only holds numbers.
pub fn normalize(raw: &Value) -> NormalizedPrediction {
    match raw.as_object() {
        Some(map) => normalize_map(map),
        None => NormalizedPrediction::default(),
    }
}

pub fn normalize_map(raw: &Map<String, Value>) -> NormalizedPrediction {
    NormalizedPrediction {
        home_score: resolve(raw, HOME_SCORE_KEYS),
        away_score: resolve(raw, AWAY_SCORE_KEYS),
        home_win_probability: resolve(raw, HOME_WIN_PROB_KEYS),
        predicted_point_diff: resolve(raw, POINT_DIFF_KEYS),
    }
}

/// Zero favors the home side.
pub fn favored_side(diff: f64) -> FavoredSide {
    if diff < 0.0 {
        FavoredSide::Away
    } else {
        FavoredSide::Home
    }
}

impl NormalizedPrediction {
    pub fn favored_side(&self) -> Option<FavoredSide> {
        self.predicted_point_diff.map(favored_side)
    }

    /// Values outside their expected domain. Nothing is clamped.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if let Some(p) = self.home_win_probability {
            if !(0.0..=1.0).contains(&p) {
                issues.push(format!("home win probability {} outside [0, 1]", p));
            }
        }
        let fields = [
            ("home score", self.home_score),
            ("away score", self.away_score),
            ("predicted point diff", self.predicted_point_diff),
        ];
        for (name, value) in fields {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                issues.push(format!("{} is not finite: {}", name, v));
            }
        }
        issues
    }
}

// Text rendering of a prediction
use crate::model::{FavoredSide, NormalizedPrediction};
use crate::predictor::Prediction;
use crate::teams::normalize_team;
use serde_json::Value;
use std::fmt;

fn score_text(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

/// Score card for a normalized prediction between two teams.
pub struct ScoreCard<'a> {
    home: String,
    away: String,
    prediction: &'a NormalizedPrediction,
}

impl<'a> ScoreCard<'a> {
    pub fn new(home: &str, away: &str, prediction: &'a NormalizedPrediction) -> Self {
        Self {
            home: normalize_team(home),
            away: normalize_team(away),
            prediction,
        }
    }
}

impl fmt::Display for ScoreCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.prediction;
        let (hs, aws) = match (p.home_score, p.away_score) {
            (Some(h), Some(a)) => (score_text(h), score_text(a)),
            _ => ("?".to_string(), "?".to_string()),
        };

        writeln!(f, "{:<12} {:>5}", format!("{} (Home)", self.home), hs)?;
        writeln!(f, "{:<12} {:>5}", format!("{} (Away)", self.away), aws)?;

        if let Some(prob) = p.home_win_probability {
            writeln!(f, "Home win probability: {:.1}%", prob * 100.0)?;
        }
        if let (Some(diff), Some(side)) = (p.predicted_point_diff, p.favored_side()) {
            let team = match side {
                FavoredSide::Home => &self.home,
                FavoredSide::Away => &self.away,
            };
            writeln!(f, "Predicted point diff: {:+.1} ({} favored)", diff, team)?;
        }
        Ok(())
    }
}

pub fn render_normalized(home: &str, away: &str, p: &NormalizedPrediction) -> String {
    ScoreCard::new(home, away, p).to_string()
}

pub fn render_card(prediction: &Prediction) -> String {
    render_normalized(
        &prediction.matchup.home_team,
        &prediction.matchup.away_team,
        &prediction.normalized,
    )
}

pub fn render_raw(raw: &Value) -> String {
    serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_renders_question_marks() {
        let p = NormalizedPrediction {
            home_score: Some(24.0),
            ..Default::default()
        };
        let card = render_normalized("kc", "buf", &p);
        assert!(card.contains("KC (Home)"));
        assert_eq!(card.matches('?').count(), 2);
        assert!(!card.contains("24"));
    }

    #[test]
    fn probability_and_favored_team() {
        let p = NormalizedPrediction {
            home_score: Some(27.0),
            away_score: Some(23.5),
            home_win_probability: Some(0.642),
            predicted_point_diff: Some(-2.5),
        };
        let card = render_normalized("KC", "BUF", &p);
        assert!(card.contains("27"));
        assert!(card.contains("23.5"));
        assert!(card.contains("Home win probability: 64.2%"));
        assert!(card.contains("Predicted point diff: -2.5 (BUF favored)"));
    }

    #[test]
    fn huge_whole_scores_print_in_full() {
        let p = NormalizedPrediction {
            home_score: Some(1e30),
            away_score: Some(-3.0),
            ..Default::default()
        };
        let card = render_normalized("KC", "BUF", &p);
        assert!(card.contains("1000000000000000019884624838656"));
        assert!(!card.contains(&i64::MAX.to_string()));
        assert!(card.contains("-3"));
    }

    #[test]
    fn even_game_favors_home() {
        let p = NormalizedPrediction {
            predicted_point_diff: Some(0.0),
            ..Default::default()
        };
        assert!(render_normalized("SF", "SEA", &p).contains("(SF favored)"));
    }
}

// Request validation and body building
use crate::model::{Matchup, RequestError, RequestSchema, SeasonStyle, SeasonWindow};
use crate::teams::{is_known, normalize_team};
use serde_json::{Map, Value, json};

const MIN_SEASON: u16 = 2000;
const MAX_SEASON: u16 = 2100;
// 18 regular-season weeks plus four playoff rounds.
const MAX_WEEK: u8 = 22;

fn check_season(season: u16) -> Result<(), RequestError> {
    if (MIN_SEASON..=MAX_SEASON).contains(&season) {
        Ok(())
    } else {
        Err(RequestError::SeasonOutOfRange(season))
    }
}

/// Rejects input the service would refuse before any request is made.
pub fn validate(matchup: &Matchup) -> Result<(), RequestError> {
    for team in [&matchup.home_team, &matchup.away_team] {
        if !is_known(team) {
            return Err(RequestError::UnknownTeam(team.trim().to_string()));
        }
    }
    if normalize_team(&matchup.home_team) == normalize_team(&matchup.away_team) {
        return Err(RequestError::SameTeam);
    }

    match matchup.window {
        SeasonWindow::Single { season, week } => {
            check_season(season)?;
            if let Some(week) = week {
                if !(1..=MAX_WEEK).contains(&week) {
                    return Err(RequestError::WeekOutOfRange(week));
                }
            }
        }
        SeasonWindow::Range { start_season, end_season } => {
            check_season(start_season)?;
            check_season(end_season)?;
            if start_season > end_season {
                return Err(RequestError::InvertedSeasons {
                    start: start_season,
                    end: end_season,
                });
            }
        }
    }
    Ok(())
}

/// Builds the JSON body using the field names selected by `schema`.
pub fn build_payload(matchup: &Matchup, schema: &RequestSchema) -> Value {
    let mut body = Map::new();
    body.insert("home_team".into(), json!(normalize_team(&matchup.home_team)));
    body.insert("away_team".into(), json!(normalize_team(&matchup.away_team)));

    match (schema.season_style, matchup.window) {
        (SeasonStyle::SingleSeason, SeasonWindow::Single { season, week }) => {
            body.insert("season".into(), json!(season));
            body.insert("week".into(), json!(week));
        }
        (SeasonStyle::SingleSeason, SeasonWindow::Range { end_season, .. }) => {
            body.insert("season".into(), json!(end_season));
            body.insert("week".into(), Value::Null);
        }
        (SeasonStyle::SeasonRange, SeasonWindow::Single { season, .. }) => {
            body.insert("start_season".into(), json!(season));
            body.insert("end_season".into(), json!(season));
        }
        (SeasonStyle::SeasonRange, SeasonWindow::Range { start_season, end_season }) => {
            body.insert("start_season".into(), json!(start_season));
            body.insert("end_season".into(), json!(end_season));
        }
    }

    body.insert("model_type".into(), json!(matchup.model_type.as_str()));
    body.insert(schema.neutral_key.as_str().into(), json!(matchup.neutral));
    Value::Object(body)
}

// Core structs: Matchup, NormalizedPrediction, errors
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical prediction record. A field is `None` when the service sent none of its
/// candidate keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NormalizedPrediction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_win_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_point_diff: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoredSide {
    Home,
    Away,
}

impl fmt::Display for FavoredSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoredSide::Home => f.write_str("HOME"),
            FavoredSide::Away => f.write_str("AWAY"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    #[default]
    Linear,
    #[serde(rename = "gboost")]
    GBoost,
    Rf,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Linear => "linear",
            ModelType::GBoost => "gboost",
            ModelType::Rf => "rf",
        }
    }
}

impl FromStr for ModelType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(ModelType::Linear),
            "gboost" => Ok(ModelType::GBoost),
            "rf" => Ok(ModelType::Rf),
            other => Err(RequestError::UnknownModelType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeasonWindow {
    Single { season: u16, week: Option<u8> },
    Range { start_season: u16, end_season: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub home_team: String,
    pub away_team: String,
    pub window: SeasonWindow,
    pub model_type: ModelType,
    pub neutral: bool,
}

/// How season fields are named in the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonStyle {
    #[default]
    SingleSeason,
    SeasonRange,
}

/// Which key carries the neutral-venue flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralKey {
    #[default]
    NeutralField,
    NeutralSite,
}

impl NeutralKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeutralKey::NeutralField => "neutral_field",
            NeutralKey::NeutralSite => "neutral_site",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RequestSchema {
    #[serde(default)]
    pub season_style: SeasonStyle,
    #[serde(default)]
    pub neutral_key: NeutralKey,
}

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    #[error("Home and away teams must be different.")]
    SameTeam,
    #[error("season {0} outside 2000..=2100")]
    SeasonOutOfRange(u16),
    #[error("start season {start} is after end season {end}")]
    InvertedSeasons { start: u16, end: u16 },
    #[error("week {0} outside 1..=22")]
    WeekOutOfRange(u8),
    #[error("model_type must be 'linear', 'gboost', or 'rf' (got '{0}')")]
    UnknownModelType(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid JSON in response: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("Error contacting API: {0}")]
    Client(#[from] ClientError),
}

use crate::model::{Matchup, ModelType, RequestSchema, SeasonWindow};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug)]
pub struct AppConfig {
    pub api_base: String,
    pub predict_endpoint: String,
    pub request_timeout_seconds: u64,
    pub schema: RequestSchema,
    pub default_model_type: ModelType,
    pub matchups: Vec<Matchup>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".into(),
            predict_endpoint: "/predict".into(),
            request_timeout_seconds: 10,
            schema: RequestSchema::default(),
            default_model_type: ModelType::Linear,
            matchups: Vec::new(),
        }
    }
}

/// On-disk shape of `config.json`. Matchups may leave `model_type` out.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_base: String,
    predict_endpoint: String,
    request_timeout_seconds: u64,
    schema: RequestSchema,
    default_model_type: ModelType,
    matchups: Vec<MatchupEntry>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = AppConfig::default();
        Self {
            api_base: defaults.api_base,
            predict_endpoint: defaults.predict_endpoint,
            request_timeout_seconds: defaults.request_timeout_seconds,
            schema: defaults.schema,
            default_model_type: defaults.default_model_type,
            matchups: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatchupEntry {
    home_team: String,
    away_team: String,
    window: SeasonWindow,
    #[serde(default)]
    model_type: Option<ModelType>,
    #[serde(default)]
    neutral: bool,
}

impl MatchupEntry {
    fn resolve(self, default_model_type: ModelType) -> Matchup {
        Matchup {
            home_team: self.home_team,
            away_team: self.away_team,
            window: self.window,
            model_type: self.model_type.unwrap_or(default_model_type),
            neutral: self.neutral,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid config {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };
    parse_config(&content, &path.display().to_string())
}

/// Parses config text; `origin` names the source in error messages.
pub fn parse_config(content: &str, origin: &str) -> Result<AppConfig, ConfigError> {
    let file: ConfigFile = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_string(),
        source,
    })?;

    if file.request_timeout_seconds == 0 {
        return Err(ConfigError::Invalid {
            path: origin.to_string(),
            reason: "request_timeout_seconds must be at least 1".into(),
        });
    }

    let default_model_type = file.default_model_type;
    Ok(AppConfig {
        api_base: file.api_base,
        predict_endpoint: file.predict_endpoint,
        request_timeout_seconds: file.request_timeout_seconds,
        schema: file.schema,
        default_model_type,
        matchups: file
            .matchups
            .into_iter()
            .map(|m| m.resolve(default_model_type))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NeutralKey, SeasonStyle};

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = parse_config(
            r#"{
                "api_base": "https://scorebot.example",
                "schema": { "season_style": "season_range", "neutral_key": "neutral_site" },
                "matchups": [
                    { "home_team": "KC", "away_team": "BUF",
                      "window": { "kind": "single", "season": 2024, "week": 5 } }
                ]
            }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(cfg.predict_endpoint, "/predict");
        assert_eq!(cfg.request_timeout_seconds, 10);
        assert_eq!(cfg.schema.season_style, SeasonStyle::SeasonRange);
        assert_eq!(cfg.schema.neutral_key, NeutralKey::NeutralSite);
        assert_eq!(
            cfg.matchups[0].window,
            SeasonWindow::Single { season: 2024, week: Some(5) }
        );
        assert_eq!(cfg.matchups[0].model_type, ModelType::Linear);
    }

    #[test]
    fn example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json");
        let cfg = load_config(path).unwrap();
        assert_eq!(cfg.matchups.len(), 2);
        assert_eq!(cfg.matchups[1].model_type, ModelType::GBoost);
        assert!(cfg.matchups[1].neutral);
    }

    #[test]
    fn matchups_without_model_type_use_configured_default() {
        let cfg = parse_config(
            r#"{
                "default_model_type": "rf",
                "matchups": [
                    { "home_team": "KC", "away_team": "BUF",
                      "window": { "kind": "single", "season": 2024 } },
                    { "home_team": "SF", "away_team": "SEA", "model_type": "linear",
                      "window": { "kind": "single", "season": 2024 } }
                ]
            }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(cfg.default_model_type, ModelType::Rf);
        assert_eq!(cfg.matchups[0].model_type, ModelType::Rf);
        assert_eq!(cfg.matchups[1].model_type, ModelType::Linear);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = parse_config(r#"{ "request_timeout_seconds": 0 }"#, "inline");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config("does/not/exist/config.json").unwrap();
        assert_eq!(cfg.api_base, "http://127.0.0.1:8000");
        assert!(cfg.matchups.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("scorebot-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = load_config(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}

//! Command-line argument parsing.

use crate::model::{Matchup, ModelType, RequestError, SeasonWindow};
use crate::teams::{DEFAULT_AWAY, DEFAULT_HOME};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Client for the matchup prediction service
#[derive(Parser)]
#[command(name = "scorebot", version)]
#[command(about = "Ask a prediction service who wins an NFL matchup", long_about = None)]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Service base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict a single matchup
    Predict(PredictArgs),

    /// Predict every matchup listed in the config file
    Batch {
        /// Print normalized predictions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a saved service response (`-` reads stdin)
    Normalize {
        file: String,
        /// Home team for the score card
        #[arg(long, default_value = DEFAULT_HOME)]
        home: String,
        /// Away team for the score card
        #[arg(long, default_value = DEFAULT_AWAY)]
        away: String,
    },

    /// List team codes
    Teams,
}

#[derive(Args)]
pub struct PredictArgs {
    #[arg(long, default_value = DEFAULT_HOME)]
    pub home: String,

    #[arg(long, default_value = DEFAULT_AWAY)]
    pub away: String,

    /// Season (ignored when --start-season/--end-season are given)
    #[arg(long, default_value_t = 2024)]
    pub season: u16,

    #[arg(long)]
    pub week: Option<u8>,

    #[arg(long, requires = "end_season")]
    pub start_season: Option<u16>,

    #[arg(long, requires = "start_season")]
    pub end_season: Option<u16>,

    /// linear, gboost or rf (defaults to the config value)
    #[arg(long)]
    pub model: Option<String>,

    /// Game is played at a neutral venue
    #[arg(long)]
    pub neutral: bool,

    /// Print the normalized prediction as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the raw service response
    #[arg(long)]
    pub raw: bool,
}

impl PredictArgs {
    pub fn to_matchup(&self, default_model: ModelType) -> Result<Matchup, RequestError> {
        let model_type = match &self.model {
            Some(m) => m.parse()?,
            None => default_model,
        };
        let window = match (self.start_season, self.end_season) {
            (Some(start_season), Some(end_season)) => SeasonWindow::Range {
                start_season,
                end_season,
            },
            _ => SeasonWindow::Single {
                season: self.season,
                week: self.week,
            },
        };
        Ok(Matchup {
            home_team: self.home.clone(),
            away_team: self.away.clone(),
            window,
            model_type,
            neutral: self.neutral,
        })
    }
}

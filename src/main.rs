use clap::Parser;
use futures::future::join_all;
use scorebot::cli::{Cli, Commands, PredictArgs};
use scorebot::client::{HttpPredictionClient, PredictionClient};
use scorebot::config::{AppConfig, load_config};
use scorebot::normalizer::normalize;
use scorebot::predictor::predict_matchup;
use scorebot::render::{render_card, render_normalized, render_raw};
use scorebot::teams::TEAMS;
use serde_json::Value;
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let cli = Cli::parse();

    let mut config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }

    let ok = match cli.command {
        Commands::Predict(args) => run_predict(&config, &args).await,
        Commands::Batch { json } => run_batch(&config, json).await,
        Commands::Normalize { file, home, away } => run_normalize(&file, &home, &away),
        Commands::Teams => {
            println!("{}", TEAMS.join(" "));
            true
        }
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn make_client(config: &AppConfig) -> Option<HttpPredictionClient> {
    match HttpPredictionClient::from_config(config) {
        Ok(c) => Some(c),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            None
        }
    }
}

async fn run_predict(config: &AppConfig, args: &PredictArgs) -> bool {
    let matchup = match args.to_matchup(config.default_model_type) {
        Ok(m) => m,
        Err(e) => {
            error!("{}", e);
            return false;
        }
    };
    let Some(client) = make_client(config) else {
        return false;
    };

    match predict_matchup(&client, &config.schema, &matchup).await {
        Ok(prediction) => {
            if args.json {
                println!("{}", render_raw(&serde_json::json!(prediction.normalized)));
            } else {
                print!("{}", render_card(&prediction));
            }
            if args.raw {
                println!("{}", render_raw(&prediction.raw));
            }
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Runs every configured matchup concurrently, one request each.
async fn run_batch(config: &AppConfig, json: bool) -> bool {
    if config.matchups.is_empty() {
        warn!("No matchups configured");
        return true;
    }
    let Some(client) = make_client(config) else {
        return false;
    };
    let client: &dyn PredictionClient = &client;

    info!("Matchups to process: {}", config.matchups.len());
    let tasks = config
        .matchups
        .iter()
        .map(|m| predict_matchup(client, &config.schema, m));
    let results = join_all(tasks).await;

    let mut failures = 0;
    for (matchup, result) in config.matchups.iter().zip(results) {
        match result {
            Ok(prediction) if json => {
                println!("{}", serde_json::json!({
                    "home_team": matchup.home_team,
                    "away_team": matchup.away_team,
                    "prediction": prediction.normalized,
                }));
            }
            Ok(prediction) => println!("{}", render_card(&prediction)),
            Err(e) => {
                failures += 1;
                warn!("{} vs {}: {}", matchup.home_team, matchup.away_team, e);
            }
        }
    }
    info!("Finished {} matchups, {} failed", config.matchups.len(), failures);
    failures == 0
}

fn run_normalize(file: &str, home: &str, away: &str) -> bool {
    let content = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(file)
    };
    let content = match content {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read {}: {}", file, e);
            return false;
        }
    };
    let raw: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            error!("Invalid JSON in {}: {}", file, e);
            return false;
        }
    };
    let normalized = normalize(&raw);
    for issue in normalized.check() {
        warn!("Suspicious prediction value: {}", issue);
    }
    print!("{}", render_normalized(home, away, &normalized));
    true
}

use crate::client::PredictionClient;
use crate::model::{Matchup, NormalizedPrediction, PredictError, RequestSchema};
use crate::normalizer::normalize;
use crate::request::{build_payload, validate};
use serde_json::Value;
use tracing::{info, warn};

/// One received prediction: what was asked, what came back, and what it means.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub matchup: Matchup,
    pub raw: Value,
    pub normalized: NormalizedPrediction,
}

/// Validates the matchup, sends a single request and normalizes the answer.
pub async fn predict_matchup(
    client: &dyn PredictionClient,
    schema: &RequestSchema,
    matchup: &Matchup,
) -> Result<Prediction, PredictError> {
    validate(matchup)?;
    let payload = build_payload(matchup, schema);

    info!("Requesting prediction: {} vs {}", matchup.home_team, matchup.away_team);
    let raw = client.predict(&payload).await?;

    let normalized = normalize(&raw);
    for issue in normalized.check() {
        warn!("Suspicious prediction value: {}", issue);
    }
    info!("Prediction received.");

    Ok(Prediction {
        matchup: matchup.clone(),
        raw,
        normalized,
    })
}

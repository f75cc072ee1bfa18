use crate::client::traits::PredictionClient;
use crate::config::AppConfig;
use crate::model::ClientError;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

pub struct HttpPredictionClient {
    pub client: Client,
    pub url: String,
}

impl HttpPredictionClient {
    pub fn new(api_base: &str, endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("scorebot/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: build_url(api_base, endpoint),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base,
            &config.predict_endpoint,
            Duration::from_secs(config.request_timeout_seconds),
        )
    }
}

fn build_url(api_base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[async_trait::async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, payload: &Value) -> Result<Value, ClientError> {
        info!("POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;
        if !status.is_success() {
            warn!("Prediction service responded [{}]: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidJson(e.to_string()))
    }
}

fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Http(e)
    }
}

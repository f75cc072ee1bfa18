use crate::model::ClientError;
use serde_json::Value;

#[async_trait::async_trait]
pub trait PredictionClient: Send + Sync {
    /// Sends one prediction request and returns the decoded response body.
    async fn predict(&self, payload: &Value) -> Result<Value, ClientError>;
}

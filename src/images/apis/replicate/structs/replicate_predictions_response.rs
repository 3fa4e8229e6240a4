use serde::Deserialize;
use serde_json::Value;

use crate::images::apis::replicate::enums::replicate_prediction_status::ReplicatePredictionStatus;

#[derive(Debug, Deserialize)]
pub struct ReplicatePredictionsResponse {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ReplicatePredictionsResponse {
    pub fn status(&self) -> Option<ReplicatePredictionStatus> {
        ReplicatePredictionStatus::from_value(&self.status)
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message.to_string()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Output items in order: arrays are spread, a lone value counts as one
    /// item, a missing output yields none.
    pub fn output_items(self) -> Vec<Value> {
        match self.output {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(item) => vec![item],
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tokio::time::sleep;

use crate::images::{
    generator::{GenerationError, ImageGenerator},
    models::generation_input::GenerationInput,
};

use super::{
    config::API_URL,
    enums::{
        replicate_model_version::ReplicateModelVersion,
        replicate_prediction_status::ReplicatePredictionStatus,
    },
    models::input_spec::InputSpec,
    structs::replicate_predictions_response::ReplicatePredictionsResponse,
};

/// Runs predictions on Replicate: creates one, then polls it until it
/// settles. Holds no per-request state, so one instance serves every
/// concurrent call.
#[derive(Debug, Clone)]
pub struct ReplicateService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model_version: String,
    poll_interval: Duration,
}

impl ReplicateService {
    pub fn new(api_key: &str, poll_interval: Duration) -> Self {
        Self::with_api_url(API_URL, api_key, poll_interval)
    }

    pub fn with_api_url(api_url: &str, api_key: &str, poll_interval: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model_version: ReplicateModelVersion::STABLE_DIFFUSION.to_string(),
            poll_interval,
        }
    }

    async fn create_prediction(
        &self,
        input: &GenerationInput,
    ) -> Result<ReplicatePredictionsResponse, GenerationError> {
        let input_spec = InputSpec {
            version: &self.model_version,
            input,
        };

        let url = format!("{}/predictions", self.api_url);
        let res = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Token {}", self.api_key))
            .json(&input_spec)
            .send()
            .await?;

        read_prediction(res).await
    }

    async fn get_prediction_by_id(
        &self,
        id: &str,
    ) -> Result<ReplicatePredictionsResponse, GenerationError> {
        let url = format!("{}/predictions/{}", self.api_url, id);
        let res = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Token {}", self.api_key))
            .send()
            .await?;

        read_prediction(res).await
    }

    async fn await_prediction_completion(
        &self,
        created: ReplicatePredictionsResponse,
    ) -> Result<ReplicatePredictionsResponse, GenerationError> {
        let mut prediction = created;

        loop {
            match prediction.status() {
                Some(status) if status.is_terminal() => break,
                None => {
                    tracing::error!(
                        "prediction {} reported unknown status {}",
                        prediction.id,
                        prediction.status
                    );
                    break;
                }
                Some(_) => {
                    tracing::debug!(
                        "waiting for prediction {} ({})",
                        prediction.id,
                        prediction.status
                    );
                    sleep(self.poll_interval).await;
                    prediction = self.get_prediction_by_id(&prediction.id).await?;
                }
            }
        }

        if prediction.status() != Some(ReplicatePredictionStatus::Succeeded) {
            return Err(GenerationError::PredictionFailed {
                error: prediction.error_message(),
                id: prediction.id,
                status: prediction.status,
            });
        }

        Ok(prediction)
    }
}

#[async_trait]
impl ImageGenerator for ReplicateService {
    async fn run(&self, input: &GenerationInput) -> Result<Vec<Value>, GenerationError> {
        let created = self.create_prediction(input).await?;
        tracing::debug!("created prediction {}", created.id);

        let prediction = self.await_prediction_completion(created).await?;
        tracing::debug!("prediction {} succeeded", prediction.id);

        Ok(prediction.output_items())
    }
}

async fn read_prediction(
    res: reqwest::Response,
) -> Result<ReplicatePredictionsResponse, GenerationError> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        return Err(GenerationError::UnexpectedStatus {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!("read_prediction: {:?}", text);
        GenerationError::Decode(e.to_string())
    })
}

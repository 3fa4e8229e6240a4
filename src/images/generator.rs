use async_trait::async_trait;
use serde_json::Value;

use super::models::generation_input::GenerationInput;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request to inference service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("inference service responded with {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("could not decode inference service response: {0}")]
    Decode(String),
    #[error("prediction {id} ended as {status}: {error:?}")]
    PredictionFailed {
        id: String,
        status: String,
        error: Option<String>,
    },
}

/// A hosted model that turns one input into zero or more output values.
///
/// Outputs are returned untyped; callers decide which items are usable.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn run(&self, input: &GenerationInput) -> Result<Vec<Value>, GenerationError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Records every input and replies with a canned result.
    pub struct RecordingGenerator {
        pub inputs: Mutex<Vec<GenerationInput>>,
        outputs: Vec<Value>,
        fail: bool,
    }

    impl RecordingGenerator {
        pub fn succeeding(outputs: Vec<Value>) -> Self {
            Self {
                inputs: Mutex::new(Vec::new()),
                outputs,
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                inputs: Mutex::new(Vec::new()),
                outputs: Vec::new(),
                fail: true,
            }
        }

        pub fn calls(&self) -> usize {
            self.inputs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ImageGenerator for RecordingGenerator {
        async fn run(&self, input: &GenerationInput) -> Result<Vec<Value>, GenerationError> {
            self.inputs.lock().unwrap().push(input.clone());

            match self.fail {
                true => Err(GenerationError::UnexpectedStatus {
                    status: 401,
                    body: "Invalid token: r8_secret".to_string(),
                }),
                false => Ok(self.outputs.clone()),
            }
        }
    }
}

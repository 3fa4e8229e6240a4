use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    PromptRequired,
    InvalidRequestFormat,
    GenerationFailed,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required.".to_string(),
            },
            Self::InvalidRequestFormat => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid request format.".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error from image generation API.".to_string(),
            },
        }
    }
}

use axum::{extract::rejection::JsonRejection, Json};
use axum_macros::FromRequest;

use crate::{app::models::api_error::ApiError, images::errors::ImagesApiError};

/// `Json` extractor whose rejections render as `{ "error": ... }` bodies.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::info!("rejected request body: {}", rejection);
        ImagesApiError::InvalidRequestFormat.value()
    }
}

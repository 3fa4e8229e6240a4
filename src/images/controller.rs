use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generate_image_response::GenerateImageResponse, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let dto = dto.sanitized();
    tracing::info!("generate_image received prompt: {:?}", dto.prompt);

    match dto.validate() {
        Ok(_) => match service::generate_images(
            &dto,
            state.envy.image_count(),
            state.generator.as_ref(),
        )
        .await
        {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => {
            tracing::info!("generate_image rejected: {}", e);
            Err(ImagesApiError::PromptRequired.value())
        }
    }
}

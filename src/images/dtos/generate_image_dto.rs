use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Prompt is required."))]
    pub prompt: String,
}

impl GenerateImageDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self.prompt.trim().to_string(),
        };
    }
}

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::errors::GalleryError;

/// Generates a batch of image URLs for a prompt.
#[async_trait]
pub trait GenerateImageApi: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<String>, GalleryError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateImageBody {
    image_urls: Option<Vec<String>>,
    error: Option<String>,
}

/// Calls `POST {base_url}/api/generate-image`.
#[derive(Debug, Clone)]
pub struct HttpGenerateImageClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGenerateImageClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GenerateImageApi for HttpGenerateImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<String>, GalleryError> {
        let url = format!("{}/api/generate-image", self.base_url);
        let res = self
            .client
            .post(url)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        let body = match serde_json::from_str::<GenerateImageBody>(&text) {
            Ok(body) => body,
            Err(_) => {
                return Err(GalleryError::UnexpectedResponse {
                    status: status.as_u16(),
                    body: text,
                })
            }
        };

        match body {
            GenerateImageBody {
                error: Some(error), ..
            } if !error.is_empty() => Err(GalleryError::Server(error)),
            GenerateImageBody {
                image_urls: Some(image_urls),
                ..
            } => Ok(image_urls),
            _ => Err(GalleryError::UnexpectedResponse {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

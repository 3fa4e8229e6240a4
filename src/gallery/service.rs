use uuid::Uuid;

use super::{client::GenerateImageApi, errors::GalleryError, models::displayed_image::DisplayedImage};

/// Client-side gallery state: the prompt being edited, the current batch of
/// images, and the outcome of the last submission. Nothing is persisted.
#[derive(Debug, Default)]
pub struct Gallery {
    prompt: String,
    is_generating: bool,
    error: Option<String>,
    images: Vec<DisplayedImage>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn images(&self) -> &[DisplayedImage] {
        &self.images
    }

    /// Whether a submission would be sent right now.
    pub fn can_submit(&self) -> bool {
        !self.is_generating && !self.prompt.trim().is_empty()
    }

    /// Starts a submission and returns the prompt to send, or `None` when the
    /// prompt is blank or another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.is_generating = true;
        self.error = None;

        Some(self.prompt.to_string())
    }

    /// Applies the outcome of a submission started with `begin_submit`.
    pub fn finish_submit(&mut self, prompt: &str, result: Result<Vec<String>, GalleryError>) {
        match result {
            Ok(urls) => {
                self.images = urls
                    .iter()
                    .map(|url| DisplayedImage::new(url, prompt))
                    .collect();
                self.prompt.clear();
            }
            Err(e) => {
                tracing::warn!("generation failed: {}", e);
                self.error = Some(e.display_message());
            }
        }

        self.is_generating = false;
    }

    pub async fn submit(&mut self, api: &dyn GenerateImageApi) {
        let Some(prompt) = self.begin_submit() else {
            return;
        };

        let in_flight = InFlight { gallery: self };
        let result = api.generate_image(&prompt).await;
        in_flight.gallery.finish_submit(&prompt, result);
    }

    /// Removes one image from the current batch. Local only.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        let len = self.images.len();
        self.images.retain(|image| &image.id != id);

        self.images.len() != len
    }
}

/// Clears the in-flight flag when a submission ends, including when the
/// submitting future is dropped before the call settles.
struct InFlight<'a> {
    gallery: &'a mut Gallery,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gallery.is_generating = false;
    }
}

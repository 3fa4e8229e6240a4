#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The server answered with an `{ "error": ... }` body.
    #[error("{0}")]
    Server(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl GalleryError {
    pub const FALLBACK_MESSAGE: &str = "Failed to generate images. Please try again.";

    /// Message shown to the user: the server's own message when it sent one.
    pub fn display_message(&self) -> String {
        match self {
            Self::Server(message) => message.to_string(),
            _ => Self::FALLBACK_MESSAGE.to_string(),
        }
    }
}

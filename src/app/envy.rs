use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub replicate_api_key: String,
    pub replicate_poll_interval_ms: Option<u64>,

    pub image_count: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_IMAGE_COUNT: usize = 6;
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(Self::DEFAULT_PORT)
    }

    /// Number of parallel generation calls per request. Never below one.
    pub fn image_count(&self) -> usize {
        self.image_count.unwrap_or(Self::DEFAULT_IMAGE_COUNT).max(1)
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.replicate_poll_interval_ms
            .unwrap_or(Self::DEFAULT_POLL_INTERVAL_MS)
    }
}

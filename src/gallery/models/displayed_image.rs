use serde::Serialize;
use uuid::Uuid;

use crate::app::util::time::current_time_in_millis;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayedImage {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub created_at: u128,
}

impl DisplayedImage {
    pub fn new(url: &str, prompt: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.to_string(),
            prompt: prompt.to_string(),
            created_at: current_time_in_millis(),
        }
    }
}

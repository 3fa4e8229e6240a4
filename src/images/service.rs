use reqwest::Url;
use serde_json::Value;

use crate::app::models::api_error::ApiError;

use super::{
    dtos::generate_image_dto::GenerateImageDto,
    errors::ImagesApiError,
    generator::ImageGenerator,
    models::{generate_image_response::GenerateImageResponse, generation_input::GenerationInput},
};

/// Issues `image_count` concurrent generations for the prompt and collects
/// their image URLs in dispatch order. One failed generation fails the batch.
pub async fn generate_images(
    dto: &GenerateImageDto,
    image_count: usize,
    generator: &dyn ImageGenerator,
) -> Result<GenerateImageResponse, ApiError> {
    let input = GenerationInput::from_prompt(&dto.prompt);

    let mut futures = Vec::with_capacity(image_count);
    for i in 0..image_count {
        tracing::debug!("dispatching generation {}/{}", i + 1, image_count);
        futures.push(generator.run(&input));
    }

    match futures::future::try_join_all(futures).await {
        Ok(generations) => {
            let image_urls = collect_image_urls(generations);
            tracing::info!("generated {} image url(s)", image_urls.len());

            Ok(GenerateImageResponse { image_urls })
        }
        Err(e) => {
            tracing::error!("generate_images failed: {}", e);
            Err(ImagesApiError::GenerationFailed.value())
        }
    }
}

pub fn collect_image_urls(generations: Vec<Vec<Value>>) -> Vec<String> {
    generations
        .into_iter()
        .flatten()
        .filter_map(|output| match output {
            Value::String(url) if is_image_url(&url) => Some(url),
            _ => None,
        })
        .collect()
}

fn is_image_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Barrier;

    use crate::images::generator::GenerationError;

    use super::*;

    struct SequencedGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageGenerator for SequencedGenerator {
        async fn run(&self, _input: &GenerationInput) -> Result<Vec<Value>, GenerationError> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            // later dispatches settle first
            tokio::time::sleep(Duration::from_millis(30 - 10 * i as u64)).await;

            Ok(vec![json!(format!("https://img.example/{}.png", i))])
        }
    }

    struct BarrierGenerator {
        barrier: Arc<Barrier>,
    }

    #[async_trait]
    impl ImageGenerator for BarrierGenerator {
        async fn run(&self, _input: &GenerationInput) -> Result<Vec<Value>, GenerationError> {
            self.barrier.wait().await;

            Ok(vec![json!("https://img.example/a.png")])
        }
    }

    struct FailingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageGenerator for FailingGenerator {
        async fn run(&self, _input: &GenerationInput) -> Result<Vec<Value>, GenerationError> {
            match self.calls.fetch_add(1, Ordering::SeqCst) {
                1 => Err(GenerationError::Decode("boom".to_string())),
                _ => Ok(vec![json!("https://img.example/a.png")]),
            }
        }
    }

    fn dto(prompt: &str) -> GenerateImageDto {
        GenerateImageDto {
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn keeps_only_url_strings() {
        let urls = collect_image_urls(vec![vec![
            json!("http://a"),
            json!({ "meta": 1 }),
            json!("http://b"),
        ]]);

        assert_eq!(urls, vec!["http://a", "http://b"]);
    }

    #[test]
    fn flattens_generations_in_order() {
        let urls = collect_image_urls(vec![
            vec![json!("https://x/1.png"), json!("https://x/2.png")],
            vec![],
            vec![json!(null), json!(42), json!("https://x/3.png")],
        ]);

        assert_eq!(
            urls,
            vec!["https://x/1.png", "https://x/2.png", "https://x/3.png"]
        );
    }

    #[test]
    fn drops_strings_that_are_not_web_urls() {
        let urls = collect_image_urls(vec![vec![
            json!("not a url"),
            json!("/relative/path.png"),
            json!("javascript:alert(1)"),
            json!("https://ok/1.png"),
        ]]);

        assert_eq!(urls, vec!["https://ok/1.png"]);
    }

    #[tokio::test]
    async fn results_follow_dispatch_order() {
        let generator = SequencedGenerator {
            calls: AtomicUsize::new(0),
        };

        let response = generate_images(&dto("a red fox in snow"), 3, &generator)
            .await
            .unwrap();

        assert_eq!(
            response.image_urls,
            vec![
                "https://img.example/0.png",
                "https://img.example/1.png",
                "https://img.example/2.png",
            ]
        );
    }

    #[tokio::test]
    async fn generations_run_concurrently() {
        let image_count = 6;
        let generator = BarrierGenerator {
            barrier: Arc::new(Barrier::new(image_count)),
        };

        let response = tokio::time::timeout(
            Duration::from_secs(5),
            generate_images(&dto("a red fox in snow"), image_count, &generator),
        )
        .await
        .expect("generations did not overlap")
        .unwrap();

        assert_eq!(response.image_urls.len(), image_count);
    }

    #[tokio::test]
    async fn one_failure_fails_the_batch() {
        let generator = FailingGenerator {
            calls: AtomicUsize::new(0),
        };

        let e = generate_images(&dto("a red fox in snow"), 3, &generator)
            .await
            .unwrap_err();

        assert_eq!(e, ImagesApiError::GenerationFailed.value());
        assert!(!e.message.contains("boom"));
    }
}

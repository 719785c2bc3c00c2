use super::ImageGenerator;
use crate::{
    config::GeminiConfig,
    error::{BrandkitError, Result},
    http,
    models::{
        GenerateContentRequest, GenerateContentResponse, GenerationRequest, GenerationResult,
    },
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: GeminiConfig,
}

impl ImageClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.config.base_url, model)
    }

    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        if request.prompt.trim().is_empty() {
            return Err(BrandkitError::InvalidRequest("prompt must not be empty".into()));
        }

        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let payload = GenerateContentRequest::from_request(&request);

        log::info!("Generating image for prompt: \"{}\"...", request.prompt);
        log::debug!(
            "Model: {}, aspect ratio: {}, size: {}",
            model,
            request.aspect_ratio,
            request.image_size
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| BrandkitError::Connection(e.without_url().to_string()))?;

        let parsed: GenerateContentResponse = http::read_json(response).await?;
        log::debug!("Response carried {} candidate(s)", parsed.candidates.len());

        let result = parsed.into_result().map_err(|e| {
            if let BrandkitError::NoImageData { finish_reason } = &e {
                log::warn!(
                    "Response had no inline image (finish reason: {})",
                    finish_reason.as_deref().unwrap_or("none")
                );
            }
            e
        })?;

        for text in &result.text {
            log::debug!("Model text: {}", text);
        }

        Ok(result)
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        ImageClient::generate(self, request).await
    }
}

pub mod image_client;

use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResult},
};
use async_trait::async_trait;

pub use image_client::ImageClient;

/// Anything that can turn a prompt into an inline image payload.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult>;
}

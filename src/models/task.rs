use super::image::{AspectRatio, GenerationRequest};
use std::path::PathBuf;

/// One prompt and where its image ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTask {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub output: PathBuf,
}

impl AssetTask {
    pub fn new(
        prompt: impl Into<String>,
        aspect_ratio: AspectRatio,
        output: impl Into<PathBuf>,
    ) -> Self {
        AssetTask {
            prompt: prompt.into(),
            aspect_ratio,
            output: output.into(),
        }
    }

    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.prompt.clone()).with_aspect_ratio(self.aspect_ratio)
    }
}

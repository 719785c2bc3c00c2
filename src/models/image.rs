use crate::error::{BrandkitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "2:3")]
    Portrait2x3,
    #[serde(rename = "3:2")]
    Landscape3x2,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "4:5")]
    Portrait4x5,
    #[serde(rename = "5:4")]
    Landscape5x4,
    #[serde(rename = "9:16")]
    Tall9x16,
    #[serde(rename = "16:9")]
    Wide16x9,
    #[serde(rename = "21:9")]
    Ultrawide21x9,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 10] = [
        AspectRatio::Square,
        AspectRatio::Portrait2x3,
        AspectRatio::Landscape3x2,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait4x5,
        AspectRatio::Landscape5x4,
        AspectRatio::Tall9x16,
        AspectRatio::Wide16x9,
        AspectRatio::Ultrawide21x9,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Landscape5x4 => "5:4",
            AspectRatio::Tall9x16 => "9:16",
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::Ultrawide21x9 => "21:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = BrandkitError;

    fn from_str(s: &str) -> Result<Self> {
        AspectRatio::ALL
            .iter()
            .copied()
            .find(|ratio| ratio.as_str() == s.trim())
            .ok_or_else(|| {
                BrandkitError::InvalidRequest(format!("Unsupported aspect ratio: {}", s))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = BrandkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1K" => Ok(ImageSize::OneK),
            "2K" => Ok(ImageSize::TwoK),
            "4K" => Ok(ImageSize::FourK),
            other => Err(BrandkitError::InvalidRequest(format!(
                "Unsupported image size: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub image_size: ImageSize,
    /// Falls back to the client's configured model when `None`.
    pub model: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            aspect_ratio: AspectRatio::default(),
            image_size: ImageSize::default(),
            model: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_image_size(mut self, image_size: ImageSize) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub mime_type: String,
    pub data: String, // Base64 encoded
    pub text: Vec<String>,
}

// Wire format for `models/{model}:generateContent`.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<&'static str>,
    pub image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: AspectRatio,
    pub image_size: ImageSize,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn from_request(request: &'a GenerationRequest) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
                image_config: ImageConfig {
                    aspect_ratio: request.aspect_ratio,
                    image_size: request.image_size,
                },
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    /// Pulls the first inline-data part out of the first candidate.
    pub fn into_result(self) -> Result<GenerationResult> {
        let candidate = match self.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                return Err(BrandkitError::NoImageData {
                    finish_reason: None,
                })
            }
        };

        let finish_reason = candidate.finish_reason;
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

        let text: Vec<String> = parts.iter().filter_map(|p| p.text.clone()).collect();
        let inline = parts.into_iter().find_map(|p| p.inline_data);

        match inline {
            Some(inline) => Ok(GenerationResult {
                mime_type: inline.mime_type,
                data: inline.data,
                text,
            }),
            None => Err(BrandkitError::NoImageData { finish_reason }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_matches_wire_format() {
        let request = GenerationRequest::new("navy blue icon")
            .with_aspect_ratio(AspectRatio::Wide16x9)
            .with_image_size(ImageSize::TwoK);

        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "navy blue icon" }] }],
                "generationConfig": {
                    "responseModalities": ["TEXT", "IMAGE"],
                    "imageConfig": { "aspectRatio": "16:9", "imageSize": "2K" }
                }
            })
        );
    }

    #[test]
    fn test_defaults_are_square_and_1k() {
        let request = GenerationRequest::new("x");
        assert_eq!(request.aspect_ratio, AspectRatio::Square);
        assert_eq!(request.image_size, ImageSize::OneK);
        assert!(request.model.is_none());
    }

    #[test]
    fn test_aspect_ratio_parse() {
        assert_eq!("3:4".parse::<AspectRatio>().unwrap(), AspectRatio::Portrait3x4);
        assert_eq!(" 16:9 ".parse::<AspectRatio>().unwrap(), AspectRatio::Wide16x9);
        assert!("7:3".parse::<AspectRatio>().is_err());
        assert_eq!("4k".parse::<ImageSize>().unwrap(), ImageSize::FourK);
    }

    #[test]
    fn test_first_inline_part_wins_and_text_is_kept() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Here is your image" },
                    { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                    { "inlineData": { "mimeType": "image/jpeg", "data": "BBBB" } }
                ]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        let result = response.into_result().unwrap();
        assert_eq!(result.mime_type, "image/png");
        assert_eq!(result.data, "AAAA");
        assert_eq!(result.text, vec!["Here is your image".to_string()]);
    }

    #[test]
    fn test_missing_candidates_is_no_image_data() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "OTHER" } }))
                .unwrap();
        assert!(response.into_result().unwrap_err().is_no_image_data());
    }

    #[test]
    fn test_text_only_candidate_reports_finish_reason() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I can't draw that" }] },
                "finishReason": "IMAGE_RECITATION"
            }]
        }))
        .unwrap();

        match response.into_result() {
            Err(BrandkitError::NoImageData { finish_reason }) => {
                assert_eq!(finish_reason.as_deref(), Some("IMAGE_RECITATION"))
            }
            other => panic!("expected NoImageData, got {:?}", other),
        }
    }
}

use thiserror::Error;

/// A single failed attempt recorded while probing candidate endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeAttempt {
    pub candidate: String,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum BrandkitError {
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Parse error: {message} (body: {body})")]
    Parse { message: String, body: String },

    #[error("No image data found in response{}", .finish_reason.as_deref().map(|r| format!(" (finish reason: {})", r)).unwrap_or_default())]
    NoImageData { finish_reason: Option<String> },

    #[error("Could not find {operation} endpoint after {} attempt(s)", .attempts.len())]
    EndpointNotFound {
        operation: String,
        attempts: Vec<ProbeAttempt>,
    },

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrandkitError {
    pub fn is_no_image_data(&self) -> bool {
        matches!(self, BrandkitError::NoImageData { .. })
    }
}

pub type Result<T> = std::result::Result<T, BrandkitError>;

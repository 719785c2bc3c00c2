use crate::error::{BrandkitError, Result};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_HOSTINGER_API_BASE: &str = "https://api.hostinger.com";

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const HOSTINGER_API_TOKEN_VAR: &str = "HOSTINGER_API_TOKEN";

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_API_BASE.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. The API key is
    /// mandatory; everything else falls back to the public defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup(GEMINI_API_KEY_VAR))
            .ok_or_else(|| BrandkitError::MissingCredential(GEMINI_API_KEY_VAR.into()))?;

        let mut config = GeminiConfig::new(api_key);
        if let Some(base) = non_empty(lookup("GEMINI_API_BASE")) {
            config = config.with_base_url(base);
        }
        if let Some(model) = non_empty(lookup("GEMINI_IMAGE_MODEL")) {
            config = config.with_model(model);
        }
        if let Some(secs) = parse_timeout(lookup("GEMINI_TIMEOUT_SECS"), "GEMINI_TIMEOUT_SECS")? {
            config = config.with_timeout(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone)]
pub struct HostingerConfig {
    pub api_token: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl HostingerConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        HostingerConfig {
            api_token: api_token.into(),
            base_url: DEFAULT_HOSTINGER_API_BASE.to_string(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = non_empty(lookup(HOSTINGER_API_TOKEN_VAR))
            .ok_or_else(|| BrandkitError::MissingCredential(HOSTINGER_API_TOKEN_VAR.into()))?;

        let mut config = HostingerConfig::new(api_token);
        if let Some(base) = non_empty(lookup("HOSTINGER_API_BASE")) {
            config = config.with_base_url(base);
        }
        if let Some(secs) =
            parse_timeout(lookup("HOSTINGER_TIMEOUT_SECS"), "HOSTINGER_TIMEOUT_SECS")?
        {
            config = config.with_timeout(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for HostingerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostingerConfig")
            .field("api_token", &mask_secret(&self.api_token))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(value: Option<String>, name: &str) -> Result<Option<Duration>> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| {
                BrandkitError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    name, raw
                ))
            }),
    }
}

const MASK_VISIBLE_CHARS: usize = 4;
const MASK_MIN_LEN: usize = 8;

/// Key material for logs: enough to tell two keys apart, never the key itself.
/// Keys of `MASK_MIN_LEN` characters or fewer show no characters at all.
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= MASK_MIN_LEN {
        return format!("**** ({} chars)", len);
    }
    let visible: String = secret.chars().take(MASK_VISIBLE_CHARS).collect();
    format!("{}… ({} chars)", visible, len)
}

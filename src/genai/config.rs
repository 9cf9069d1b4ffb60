//! Generative-image configuration parsed from environment variables.

use super::types::GenAiError;

pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GENAI_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_GENAI_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenAiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: GenAiTimeouts,
}

impl GenAiConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`
    ///
    /// Optional:
    /// - `GENAI_MODEL`: default `gemini-2.5-flash-image`
    /// - `GENAI_BASE_URL`: default Google Generative Language API base URL
    /// - `GENAI_REQUEST_TIMEOUT_SECS`: default 120
    /// - `GENAI_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, GenAiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenAiError::MissingApiKey { var: "GEMINI_API_KEY".into() })?;

        let model = std::env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_GENAI_MODEL.to_string());
        let base_url = std::env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = GenAiTimeouts {
            request_secs: env_parse_u64("GENAI_REQUEST_TIMEOUT_SECS", DEFAULT_GENAI_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_u64("GENAI_CONNECT_TIMEOUT_SECS", DEFAULT_GENAI_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { api_key, model, base_url, timeouts })
    }
}

/// Timeouts fail loudly when set to garbage rather than silently defaulting.
fn env_parse_u64(key: &str, default: u64) -> Result<u64, GenAiError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| GenAiError::ConfigParse(format!("{key} must be an integer, got '{raw}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

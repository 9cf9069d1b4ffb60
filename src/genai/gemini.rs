//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` with inline-data
//! image parts. Pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::config::GenAiConfig;
use super::types::{GenAiError, GenerateImage, ImagePayload};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build the client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GenAiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model, base_url: config.base_url })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash-image"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, parts: Vec<Part>) -> Result<ImagePayload, GenAiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = ApiRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig { response_modalities: vec!["IMAGE"] },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenAiError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GenAiError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(GenAiError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl GenerateImage for GeminiClient {
    async fn generate(
        &self,
        primary: &ImagePayload,
        references: &[ImagePayload],
        prompt: &str,
    ) -> Result<ImagePayload, GenAiError> {
        // Image parts come first, the instruction text last.
        let mut parts = Vec::with_capacity(references.len() + 2);
        parts.push(Part::inline(primary));
        for image in references {
            parts.push(Part::inline(image));
        }
        parts.push(Part::text(prompt));

        self.generate_content(parts).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<&'static str>,
}

#[derive(serde::Serialize)]
struct Part {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(serde::Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

impl Part {
    fn inline(image: &ImagePayload) -> Self {
        Self {
            inline_data: Some(InlineData { mime_type: image.mime_type.clone(), data: image.base64.clone() }),
            text: None,
        }
    }

    fn text(text: &str) -> Self {
        Self { inline_data: None, text: Some(text.to_string()) }
    }
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    #[serde(rename = "inlineData")]
    inline_data: Option<CandidateInlineData>,
}

#[derive(serde::Deserialize)]
struct CandidateInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first inline-data part of the first candidate. Text parts
/// (the model sometimes narrates before the image) are skipped.
fn parse_response(json: &str) -> Result<ImagePayload, GenAiError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| GenAiError::ApiParse(e.to_string()))?;

    api.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|p| p.inline_data)
        .map(|d| ImagePayload { base64: d.data, mime_type: d.mime_type })
        .ok_or(GenAiError::NoImage)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tolk_types::TranslationRequest;

use crate::prompt::{RESPONSE_MIME_TYPE, SYSTEM_INSTRUCTION, translation_schema, user_prompt};
use crate::{ProviderMetadata, TranslateError, TranslationBackend};

/// Gemini `generateContent` client with schema constrained output
#[derive(Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(
        api_key: String,
        api_base: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, TranslateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            api_base,
            model,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn for_translation(request: &TranslationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(user_prompt(
                    &request.source_text,
                    &request.target_language,
                ))],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(SYSTEM_INSTRUCTION)],
            },
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: translation_schema(&request.target_language),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Reasoning summaries, never part of the answer text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let mut text = String::new();
        let mut found = false;
        for part in &content.parts {
            if part.thought == Some(true) {
                continue;
            }
            if let Some(chunk) = &part.text {
                text.push_str(chunk);
                found = true;
            }
        }

        found.then_some(text)
    }
}

/// Map a non-success status to its error
fn status_error(status: StatusCode, body: &str) -> TranslateError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => TranslateError::RateLimitExceeded,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranslateError::AuthenticationError,
        _ => TranslateError::ApiError(format!("HTTP {status}: {body}")),
    }
}

#[async_trait]
impl TranslationBackend for GeminiBackend {
    async fn generate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let body = GenerateContentRequest::for_translation(request);
        tracing::debug!(
            "[GEMINI] {} -> {} ({} chars)",
            self.model,
            request.target_language,
            request.source_text.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("[GEMINI] request failed with {status}");
            return Err(status_error(status, &text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            TranslateError::ResponseFormat(format!("Failed to parse response: {e}"))
        })?;

        parsed
            .text()
            .ok_or_else(|| TranslateError::ResponseFormat("No text in response".to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
        }
    }
}

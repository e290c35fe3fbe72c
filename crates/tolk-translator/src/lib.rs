use tolk_types::{TranslationRequest, TranslationResult};

pub mod gemini;
pub mod payload;
pub mod prompt;

pub use gemini::GeminiBackend;
pub use payload::parse_translation_payload;

/// A hosted model that can answer a translation request
#[async_trait::async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Send the request and return the model's raw text payload
    async fn generate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Invalid response format from API: {0}")]
    ResponseFormat(String),

    #[error("Translation task failed: {0}")]
    TaskFailed(String),
}

/// Run one request through `backend` and validate the structured answer
pub async fn translate<B>(
    backend: &B,
    request: &TranslationRequest,
) -> Result<TranslationResult, TranslateError>
where
    B: TranslationBackend + ?Sized,
{
    let payload = backend.generate(request).await?;
    tracing::debug!("Model returned {} bytes", payload.len());
    parse_translation_payload(&payload)
}

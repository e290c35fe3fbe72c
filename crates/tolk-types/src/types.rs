use serde::{Deserialize, Serialize};

use crate::ViewModel;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Snapshot of the view after the controller changed it
    Render(ViewModel),
    BackendReady,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Translate { text: String, language: String },
    Copy,
    Close,
}

/// Input rejected before any request is made.
///
/// The `Display` strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter some text to translate.")]
    EmptyText,

    #[error("Please select a target language.")]
    EmptyLanguage,

    #[error("Please select a target language.")]
    UnsupportedLanguage(String),
}

/// One translation asked for by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_language: String,
}

impl TranslationRequest {
    /// Trims the source text and checks both fields are present.
    ///
    /// Text is checked before the language, so an empty form reports the
    /// missing text first.
    pub fn new(input_text: &str, target_language: &str) -> Result<Self, ValidationError> {
        let source_text = input_text.trim();
        if source_text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        if target_language.is_empty() {
            return Err(ValidationError::EmptyLanguage);
        }

        Ok(Self {
            source_text: source_text.to_string(),
            target_language: target_language.to_string(),
        })
    }

    /// Same as [`TranslationRequest::new`], additionally requiring the
    /// language to be one of `languages`
    pub fn with_languages(
        input_text: &str,
        target_language: &str,
        languages: &[String],
    ) -> Result<Self, ValidationError> {
        let request = Self::new(input_text, target_language)?;

        if !languages.iter().any(|l| l == target_language) {
            return Err(ValidationError::UnsupportedLanguage(
                target_language.to_string(),
            ));
        }

        Ok(request)
    }
}

/// The structured answer returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
}

/// Top level visual state, exactly one is active at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success {
        result: TranslationResult,
        target_language: String,
    },
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

use serde::{Deserialize, Serialize};

use crate::parse_var;

const DEFAULT_LANGUAGES: &[&str] = &[
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Dutch",
    "Russian",
    "Japanese",
    "Korean",
    "Chinese (Simplified)",
    "Arabic",
    "Hindi",
];

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_copy_label() -> String {
    "Copy".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Target languages offered in the selector
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// How long the copy button shows its confirmation
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
    #[serde(default = "default_copy_label")]
    pub copy_label: String,
}

impl UiConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let languages = lookup("TOLK_LANGUAGES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or_else(default_languages);

        let copy_feedback_ms =
            parse_var(lookup, "TOLK_COPY_FEEDBACK_MS").unwrap_or_else(default_copy_feedback_ms);

        Self {
            languages,
            copy_feedback_ms,
            copy_label: default_copy_label(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            copy_feedback_ms: default_copy_feedback_ms(),
            copy_label: default_copy_label(),
        }
    }
}

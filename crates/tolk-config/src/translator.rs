use serde::{Deserialize, Serialize};

use crate::parse_var;

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// No timeout when unset, the request resolves however the API decides
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl TranslatorConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        // Missing key is not an error here, the request fails later instead
        let api_key = lookup("API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .unwrap_or_default();

        let model = lookup("TOLK_MODEL").unwrap_or_else(default_model);
        let api_base = lookup("TOLK_API_BASE").unwrap_or_else(default_api_base);
        let request_timeout_secs = parse_var(lookup, "TOLK_REQUEST_TIMEOUT_SECS");

        Self {
            api_key,
            model,
            api_base,
            request_timeout_secs,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_base: default_api_base(),
            request_timeout_secs: None,
        }
    }
}

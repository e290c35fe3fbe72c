use serde_json::{Value, json};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert translator. The user will provide English text and a target language. Translate the text to the specified language. Return the result as a JSON object with a single 'translation' key.";

pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// User turn sent to the model
pub fn user_prompt(text: &str, target_language: &str) -> String {
    format!("Translate the following English text to {target_language}: \"{text}\"")
}

/// Schema constraining the model output to `{ "translation": string }`
pub fn translation_schema(target_language: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "translation": {
                "type": "STRING",
                "description": format!("The translated text in {target_language}"),
            },
        },
        "required": ["translation"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_language_and_quoted_text() {
        assert_eq!(
            user_prompt("See you tomorrow", "Korean"),
            "Translate the following English text to Korean: \"See you tomorrow\""
        );
    }

    #[test]
    fn schema_requires_single_string_field() {
        let schema = translation_schema("Hindi");

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["translation"]));
        assert_eq!(schema["properties"]["translation"]["type"], "STRING");
        assert_eq!(
            schema["properties"]["translation"]["description"],
            "The translated text in Hindi"
        );
        assert_eq!(schema["properties"].as_object().unwrap().len(), 1);
    }
}

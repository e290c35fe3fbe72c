use serde_json::Value;
use tolk_types::TranslationResult;

use crate::TranslateError;

/// Validate the model's text against the `{ "translation": string }` shape.
///
/// The payload is trimmed first. Anything that is not JSON, not an object, or
/// lacks a non-empty string `translation` is a format error.
pub fn parse_translation_payload(payload: &str) -> Result<TranslationResult, TranslateError> {
    let value: Value = serde_json::from_str(payload.trim())
        .map_err(|e| TranslateError::ResponseFormat(format!("payload is not JSON: {e}")))?;

    match value.get("translation").and_then(Value::as_str) {
        Some(translation) if !translation.is_empty() => Ok(TranslationResult {
            translation: translation.to_string(),
        }),
        Some(_) => Err(TranslateError::ResponseFormat(
            "empty translation".to_string(),
        )),
        None => Err(TranslateError::ResponseFormat(
            "missing translation field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_format_error(payload: &str) -> bool {
        matches!(
            parse_translation_payload(payload),
            Err(TranslateError::ResponseFormat(_))
        )
    }

    #[test]
    fn accepts_well_formed_payload() {
        let result = parse_translation_payload(r#"{"translation":"Hola mundo"}"#).unwrap();
        assert_eq!(result.translation, "Hola mundo");
    }

    #[test]
    fn ignores_surrounding_whitespace_and_extra_keys() {
        let result =
            parse_translation_payload("\n\t {\"translation\":\"Hallo\",\"note\":\"x\"} \n")
                .unwrap();
        assert_eq!(result.translation, "Hallo");
    }

    #[test]
    fn keeps_inner_whitespace_of_translation() {
        let result = parse_translation_payload(r#"{"translation":"  spaced  "}"#).unwrap();
        assert_eq!(result.translation, "  spaced  ");
    }

    #[test]
    fn rejects_non_json() {
        assert!(is_format_error("Hola mundo"));
        assert!(is_format_error(""));
        assert!(is_format_error("```json\n{\"translation\":\"Hola\"}\n```"));
    }

    #[test]
    fn rejects_missing_or_empty_translation() {
        assert!(is_format_error("{}"));
        assert!(is_format_error(r#"{"text":"Hola"}"#));
        assert!(is_format_error(r#"{"translation":""}"#));
        assert!(is_format_error(r#"{"translation":null}"#));
        assert!(is_format_error(r#"{"translation":42}"#));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(is_format_error("null"));
        assert!(is_format_error(r#""Hola""#));
        assert!(is_format_error(r#"[{"translation":"Hola"}]"#));
    }
}

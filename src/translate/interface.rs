//! Wire types shared by the relay, the upstream client and the frontend.

use serde::{Deserialize, Serialize};

pub const AUTO_SOURCE: &str = "auto";
pub const DEFAULT_FORMAT: &str = "text";

/// A supported language as reported by the translation API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub code: String,
    pub name: String,
}

impl LanguageDescriptor {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Translate body as posted to `/translate`, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// A validated request with defaults applied, ready to forward upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub q: String,
    pub source: String,
    pub target: String,
    pub format: String,
}

impl TranslatePayload {
    /// Returns `None` when `q` or `target` is missing or empty.
    pub fn validate(self) -> Option<TranslationRequest> {
        let q = self.q.filter(|q| !q.is_empty())?;
        let target = self.target.filter(|t| !t.is_empty())?;

        Some(TranslationRequest {
            q,
            source: non_empty_or(self.source, AUTO_SOURCE),
            target,
            format: non_empty_or(self.format, DEFAULT_FORMAT),
        })
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Successful translation body, `{"translatedText": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    #[serde(default)]
    pub translated_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_applies_defaults() {
        let request = TranslatePayload {
            q: Some("Hello".into()),
            target: Some("es".into()),
            ..Default::default()
        };

        let forwarded = request.validate().unwrap();
        assert_eq!(forwarded.source, "auto");
        assert_eq!(forwarded.format, "text");
        assert_eq!(forwarded.target, "es");
    }

    #[test]
    fn validate_treats_empty_strings_as_missing() {
        let request = TranslatePayload {
            q: Some(String::new()),
            target: Some("es".into()),
            source: Some(String::new()),
            format: None,
        };
        assert!(request.validate().is_none());

        let request = TranslatePayload {
            q: Some("Hello".into()),
            target: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_none());
    }

    #[test]
    fn validate_keeps_explicit_source_and_format() {
        let request = TranslatePayload {
            q: Some("<b>Hi</b>".into()),
            source: Some("en".into()),
            target: Some("fr".into()),
            format: Some("html".into()),
        };

        let forwarded = request.validate().unwrap();
        assert_eq!(forwarded.source, "en");
        assert_eq!(forwarded.format, "html");
    }

    #[test]
    fn response_uses_camel_case() {
        let parsed: TranslationResult =
            serde_json::from_str(r#"{"translatedText":"Hola"}"#).unwrap();
        assert_eq!(parsed.translated_text.as_deref(), Some("Hola"));
    }
}

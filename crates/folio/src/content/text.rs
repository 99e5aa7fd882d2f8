use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A string written in English with an optional Japanese rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ja: None,
        }
    }

    pub fn with_ja(mut self, ja: impl Into<String>) -> Self {
        self.ja = Some(ja.into());
        self
    }

    /// Text for `language`. Japanese falls back to English when it is
    /// absent or empty; an empty English string stays empty.
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::Ja => match self.ja.as_deref() {
                Some(ja) if !ja.is_empty() => ja,
                _ => &self.en,
            },
            Language::En => &self.en,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ja.as_deref().map_or(true, str::is_empty)
    }
}

impl From<&str> for LocalizedText {
    fn from(en: &str) -> Self {
        LocalizedText::new(en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_falls_back_to_english() {
        let text = LocalizedText::new("Invited talk");
        assert_eq!(text.resolve(Language::Ja), "Invited talk");

        let text = LocalizedText::new("Invited talk").with_ja("");
        assert_eq!(text.resolve(Language::Ja), "Invited talk");

        let text = LocalizedText::new("Invited talk").with_ja("招待講演");
        assert_eq!(text.resolve(Language::Ja), "招待講演");
        assert_eq!(text.resolve(Language::En), "Invited talk");
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let text: LocalizedText = serde_json::from_str("{}").unwrap();
        assert!(text.is_empty());
        assert_eq!(text.resolve(Language::Ja), "");
    }
}

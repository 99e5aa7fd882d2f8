use serde::{Deserialize, Serialize};

use super::LocalizedText;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub title: LocalizedText,
    #[serde(default)]
    pub desc: LocalizedText,
    pub year: LocalizedText,
    /// `invited`, `conference`, `workshop` or `domestic`. Kept as written so
    /// an unknown type can still be shown.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Talk {
    pub fn type_key(&self) -> String {
        format!("talks-{}", self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: LocalizedText,
    #[serde(default)]
    pub outlet: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub text: String,
    #[serde(default, rename = "isNew")]
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// A list written separately for each language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerLanguage<T> {
    pub en: Vec<T>,
    pub ja: Vec<T>,
}

impl<T> Default for PerLanguage<T> {
    fn default() -> Self {
        Self {
            en: Vec::new(),
            ja: Vec::new(),
        }
    }
}

impl<T> PerLanguage<T> {
    pub fn get(&self, language: Language) -> &[T] {
        match language {
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }
}

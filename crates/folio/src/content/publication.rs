use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PubType {
    Conference,
    Journal,
    Workshop,
    Preprint,
    Domestic,
}

impl PubType {
    pub fn as_str(self) -> &'static str {
        match self {
            PubType::Conference => "conference",
            PubType::Journal => "journal",
            PubType::Workshop => "workshop",
            PubType::Preprint => "preprint",
            PubType::Domestic => "domestic",
        }
    }

    /// Translation key of the filter chip / badge label.
    pub fn label_key(self) -> &'static str {
        match self {
            PubType::Conference => "pub-type-conference",
            PubType::Journal => "pub-type-journal",
            PubType::Workshop => "pub-type-workshop",
            PubType::Preprint => "pub-type-preprint",
            PubType::Domestic => "pub-type-domestic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    #[serde(rename = "type")]
    pub kind: PubType,
    pub year: i32,
    /// `"Mon YYYY"` when the month is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub citations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One author name, flagged when it is the site owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorSpan<'a> {
    pub name: &'a str,
    pub is_owner: bool,
}

impl Publication {
    pub fn new(
        title: impl Into<String>,
        venue: impl Into<String>,
        kind: PubType,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            authors: vec![],
            venue: venue.into(),
            kind,
            year,
            date: None,
            citations: 0,
            link: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_authors(mut self, authors: &[&str]) -> Self {
        self.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn sort_key(&self) -> i32 {
        date::sort_key(self.year, self.date.as_deref())
    }

    /// The date string when present, else the year.
    pub fn display_date(&self) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => self.year.to_string(),
        }
    }

    /// Authors in order, marking every name that contains one of
    /// `owner_names`.
    pub fn author_spans<'a>(&'a self, owner_names: &[String]) -> Vec<AuthorSpan<'a>> {
        self.authors
            .iter()
            .map(|name| AuthorSpan {
                name,
                is_owner: owner_names
                    .iter()
                    .any(|owner| name.contains(owner.as_str())),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_prefers_month() {
        let p = Publication::new("A", "X", PubType::Journal, 2023);
        assert_eq!(p.display_date(), "2023");
        assert_eq!(p.with_date("Mar 2023").display_date(), "Mar 2023");
    }

    #[test]
    fn owner_is_highlighted() {
        let p = Publication::new("A", "X", PubType::Conference, 2024).with_authors(&[
            "Taro Yamada",
            "Ryotaro Shimizu",
            "清水良太郎",
        ]);
        let owners = vec!["Shimizu".to_string(), "清水良太郎".to_string()];
        let flags: Vec<bool> = p.author_spans(&owners).iter().map(|a| a.is_owner).collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn type_field_is_named_type() {
        let p: Publication = serde_json::from_str(
            r#"{"title":"T","authors":["A"],"venue":"V","type":"preprint","year":2025}"#,
        )
        .unwrap();
        assert_eq!(p.kind, PubType::Preprint);
        assert_eq!(p.citations, 0);
        assert_eq!(p.date, None);
    }
}

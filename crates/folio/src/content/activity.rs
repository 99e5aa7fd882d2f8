use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::LocalizedText;
use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Tennis,
    Swimming,
    Running,
    Tournament,
}

impl Sport {
    pub fn emoji(self) -> &'static str {
        match self {
            Sport::Tennis => "🎾",
            Sport::Swimming => "🏊",
            Sport::Running => "🏃",
            Sport::Tournament => "🏆",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Sport::Tennis => "sport-tennis",
            Sport::Swimming => "sport-swimming",
            Sport::Running => "sport-running",
            Sport::Tournament => "sport-tournament",
        }
    }
}

/// One practice session or match on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub sport: Sport,
    #[serde(default)]
    pub focus: LocalizedText,
    #[serde(default)]
    pub result: LocalizedText,
    #[serde(default)]
    pub challenge: LocalizedText,
    #[serde(default)]
    pub next: LocalizedText,
}

impl Activity {
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            focus: LocalizedText::default(),
            result: LocalizedText::default(),
            challenge: LocalizedText::default(),
            next: LocalizedText::default(),
        }
    }

    /// The note fields in display order, paired with their label keys.
    pub fn notes(&self) -> [(&'static str, &LocalizedText); 4] {
        [
            ("tooltip-focus", &self.focus),
            ("tooltip-result", &self.result),
            ("tooltip-challenge", &self.challenge),
            ("tooltip-next", &self.next),
        ]
    }
}

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Sparse date → activities map. A day without an entry has no activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    days: BTreeMap<NaiveDate, Vec<Activity>>,
}

impl ActivityLog {
    /// Build from the on-disk shape, where days are keyed by `YYYY-MM-DD`.
    ///
    /// Only the zero padded form is accepted, so every day has exactly one
    /// key and no two keys can land on the same date.
    pub fn from_raw(
        file: &'static str,
        raw: BTreeMap<String, Vec<Activity>>,
    ) -> Result<Self, ContentError> {
        let mut days = BTreeMap::new();
        for (key, activities) in raw {
            let Some(date) = parse_day_key(&key) else {
                return Err(ContentError::BadActivityDate { file, key });
            };
            days.insert(date, activities);
        }
        Ok(Self { days })
    }

    pub fn insert(&mut self, date: NaiveDate, activity: Activity) {
        self.days.entry(date).or_default().push(activity);
    }

    pub fn on(&self, date: NaiveDate) -> &[Activity] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, date: NaiveDate) -> bool {
        self.days.get(&date).is_some_and(|a| !a.is_empty())
    }

    pub fn latest(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Activity>)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()?;
    (date.format(DAY_KEY_FORMAT).to_string() == key).then_some(date)
}

/// A racket restring: which racket, on which day, at which tension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restring {
    pub date: NaiveDate,
    pub racket: String,
    pub tension: String,
}

impl Restring {
    pub fn racket_key(&self) -> String {
        format!("racket-{}", self.racket)
    }
}

/// The most recent restring on or before `date`.
pub fn last_restring(history: &[Restring], date: NaiveDate) -> Option<&Restring> {
    history
        .iter()
        .filter(|r| r.date <= date)
        .max_by_key(|r| r.date)
}

//! Load-time checks over the static content. Nothing here is fatal: the
//! site renders whatever it was given, and problems are reported as
//! warnings so data-entry mistakes do not hide behind silent fallbacks.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::content::{Catalog, Publication};
use crate::date::{month_index, MonthYear};
use crate::i18n::{Language, Localization};
use crate::views::{PublicationView, SortOrder};

static JA_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})年(?:(\d{1,2})月)?").expect("ja date regex"));
static EN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z]{2})\s+(\d{4})$").expect("en date regex"));
static YEAR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").expect("year regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("publication '{title}': date '{date}' is not \"Mon YYYY\"; sorting by year only")]
    BadPublicationDate { title: String, date: String },

    #[error("publication '{title}': date '{date}' disagrees with year {year}")]
    DateYearMismatch {
        title: String,
        date: String,
        year: i32,
    },

    #[error("{list}[{index}]: no text in any language")]
    EmptyText { list: &'static str, index: usize },

    #[error("publications at '{venue}' on '{date}' are not adjacent when sorted {order:?}")]
    NotContiguous {
        venue: String,
        date: String,
        order: SortOrder,
    },

    #[error("{list}[{index}]: cannot read date '{date}'")]
    UnparseableListDate {
        list: &'static str,
        index: usize,
        date: String,
    },

    #[error("{list}: '{prev}' comes before newer '{next}' (index {index})")]
    Unsorted {
        list: &'static str,
        index: usize,
        prev: String,
        next: String,
    },

    #[error("translation '{key}' is missing for {language}")]
    MissingTranslation { language: Language, key: String },
}

/// `(year, month)` of a list date, month 0 when only the year is given.
/// Accepts `2025年`, `2025年6月`, `Jun 2025` and `2025`.
pub fn parse_list_date(date: &str) -> Option<(i32, i32)> {
    if let Some(caps) = JA_DATE.captures(date) {
        let year = caps.get(1)?.as_str().parse().ok()?;
        let month = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        return Some((year, month));
    }

    if let Some(caps) = EN_DATE.captures(date) {
        let year = caps.get(2)?.as_str().parse().ok()?;
        let month = month_index(caps.get(1)?.as_str()).map_or(0, |m| m + 1);
        return Some((year, month));
    }

    let caps = YEAR_ONLY.captures(date)?;
    Some((caps.get(1)?.as_str().parse().ok()?, 0))
}

/// Run every check over `catalog` and the translation tables.
pub fn validate(catalog: &Catalog) -> Vec<Warning> {
    let mut warnings = Vec::new();

    check_publication_dates(&catalog.publications, &mut warnings);
    check_grouping(&catalog.publications, &mut warnings);
    check_texts(catalog, &mut warnings);

    for language in [Language::En, Language::Ja] {
        let news: Vec<&str> = catalog
            .news
            .get(language)
            .iter()
            .map(|n| n.date.as_str())
            .collect();
        let awards: Vec<&str> = catalog
            .awards
            .get(language)
            .iter()
            .map(|a| a.year.as_str())
            .collect();
        let talks: Vec<&str> = catalog
            .talks
            .iter()
            .map(|t| t.year.resolve(language))
            .collect();

        let (news_list, awards_list, talks_list) = match language {
            Language::En => ("news (en)", "awards (en)", "talks (en)"),
            Language::Ja => ("news (ja)", "awards (ja)", "talks (ja)"),
        };
        check_descending(news_list, &news, &mut warnings);
        check_descending(awards_list, &awards, &mut warnings);
        check_descending(talks_list, &talks, &mut warnings);
    }

    for (language, key) in Localization::missing_keys() {
        warnings.push(Warning::MissingTranslation {
            language,
            key: key.to_string(),
        });
    }

    warnings
}

/// [`validate`], reporting through the log.
pub fn log_warnings(catalog: &Catalog) -> usize {
    let warnings = validate(catalog);
    for warning in &warnings {
        warn!("content: {warning}");
    }
    if warnings.is_empty() {
        info!("content validated cleanly");
    }
    warnings.len()
}

fn check_publication_dates(publications: &[Publication], warnings: &mut Vec<Warning>) {
    for publication in publications {
        let Some(date) = &publication.date else {
            continue;
        };

        match MonthYear::parse(date) {
            None => warnings.push(Warning::BadPublicationDate {
                title: publication.title.clone(),
                date: date.clone(),
            }),
            Some(parsed) if parsed.year != publication.year => {
                warnings.push(Warning::DateYearMismatch {
                    title: publication.title.clone(),
                    date: date.clone(),
                    year: publication.year,
                })
            }
            Some(_) => {}
        }
    }
}

fn check_grouping(publications: &[Publication], warnings: &mut Vec<Warning>) {
    let mut view = PublicationView::new(publications.to_vec());

    for order in [SortOrder::Newest, SortOrder::Oldest] {
        view.set_sort(order);

        // group -> index of the last member seen
        let mut last_seen: HashMap<(&str, Option<&str>), usize> = HashMap::new();
        let mut reported = Vec::new();
        for (i, publication) in view.filtered_sorted().enumerate() {
            let group = (publication.venue.as_str(), publication.date.as_deref());
            if let Some(&prev) = last_seen.get(&group) {
                if prev + 1 != i && !reported.contains(&group) {
                    reported.push(group);
                    warnings.push(Warning::NotContiguous {
                        venue: group.0.to_string(),
                        date: group.1.unwrap_or_default().to_string(),
                        order,
                    });
                }
            }
            last_seen.insert(group, i);
        }
    }
}

fn check_texts(catalog: &Catalog, warnings: &mut Vec<Warning>) {
    for (index, talk) in catalog.talks.iter().enumerate() {
        if talk.title.en.is_empty() {
            warnings.push(Warning::EmptyText {
                list: "talks.title",
                index,
            });
        }
        if talk.year.en.is_empty() {
            warnings.push(Warning::EmptyText {
                list: "talks.year",
                index,
            });
        }
    }

    for (index, item) in catalog.media.iter().enumerate() {
        if item.title.en.is_empty() {
            warnings.push(Warning::EmptyText {
                list: "media.title",
                index,
            });
        }
    }
}

fn check_descending(list: &'static str, dates: &[&str], warnings: &mut Vec<Warning>) {
    for i in 1..dates.len() {
        let (prev, next) = (dates[i - 1], dates[i]);
        let (Some(p), Some(n)) = (parse_list_date(prev), parse_list_date(next)) else {
            let index = if parse_list_date(prev).is_none() {
                i - 1
            } else {
                i
            };
            warnings.push(Warning::UnparseableListDate {
                list,
                index,
                date: dates[index].to_string(),
            });
            continue;
        };

        if p < n {
            warnings.push(Warning::Unsorted {
                list,
                index: i,
                prev: prev.to_string(),
                next: next.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LocalizedText, PubType, Talk};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_dates() {
        assert_eq!(parse_list_date("2025年"), Some((2025, 0)));
        assert_eq!(parse_list_date("2025年6月"), Some((2025, 6)));
        assert_eq!(parse_list_date("Jun 2025"), Some((2025, 6)));
        assert_eq!(parse_list_date("2025"), Some((2025, 0)));
        assert_eq!(parse_list_date("June 2025"), None);
        assert_eq!(parse_list_date("soon"), None);
    }

    #[test]
    fn embedded_content_is_clean() {
        let catalog = Catalog::embedded().expect("catalog");
        assert_eq!(validate(&catalog), vec![]);
    }

    #[test]
    fn malformed_publication_date_is_reported() {
        let mut catalog = Catalog::embedded().expect("catalog");
        catalog.publications = vec![
            Publication::new("a", "X", PubType::Journal, 2024).with_date("March 2024"),
            Publication::new("b", "X", PubType::Journal, 2024).with_date("Mar 2023"),
        ];
        let warnings = validate(&catalog);
        assert!(warnings.contains(&Warning::BadPublicationDate {
            title: "a".into(),
            date: "March 2024".into()
        }));
        assert!(warnings.contains(&Warning::DateYearMismatch {
            title: "b".into(),
            date: "Mar 2023".into(),
            year: 2024
        }));
    }

    #[test]
    fn interleaved_group_is_reported() {
        let mut catalog = Catalog::embedded().expect("catalog");
        catalog.publications = vec![
            Publication::new("x1", "X", PubType::Conference, 2024).with_date("Mar 2024"),
            Publication::new("z", "Z", PubType::Conference, 2024).with_date("Mar 2024"),
            Publication::new("x2", "X", PubType::Conference, 2024).with_date("Mar 2024"),
        ];
        let warnings: Vec<Warning> = validate(&catalog)
            .into_iter()
            .filter(|w| matches!(w, Warning::NotContiguous { .. }))
            .collect();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn unsorted_talks_are_reported() {
        let mut catalog = Catalog::embedded().expect("catalog");
        let talk = |year: &str| Talk {
            title: LocalizedText::new("t"),
            desc: LocalizedText::default(),
            year: LocalizedText::new(year),
            kind: "invited".into(),
        };
        catalog.talks = vec![talk("2023"), talk("Jan 2024"), talk("")];
        let warnings = validate(&catalog);
        assert!(warnings.contains(&Warning::Unsorted {
            list: "talks (en)",
            index: 1,
            prev: "2023".into(),
            next: "Jan 2024".into()
        }));
        assert!(warnings.contains(&Warning::EmptyText {
            list: "talks.year",
            index: 2
        }));
        assert!(warnings.contains(&Warning::UnparseableListDate {
            list: "talks (ja)",
            index: 2,
            date: "".into()
        }));
    }
}

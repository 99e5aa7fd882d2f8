//! Read-only datasets shown by the site. Each lives in `assets/content` as a
//! JSON file compiled into the binary; a directory with files of the same
//! names can replace any of them at start-up.

mod activity;
mod entries;
mod publication;
mod text;

pub use activity::{last_restring, Activity, ActivityLog, Restring, Sport};
pub use entries::{Award, MediaItem, NewsItem, PerLanguage, Talk};
pub use publication::{AuthorSpan, PubType, Publication};
pub use text::LocalizedText;

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ContentError;
use crate::{Directory, Result};

pub const PROFILE_FILE: &str = "profile.json";
pub const PUBLICATIONS_FILE: &str = "publications.json";
pub const TALKS_FILE: &str = "talks.json";
pub const MEDIA_FILE: &str = "media.json";
pub const NEWS_FILE: &str = "news.json";
pub const AWARDS_FILE: &str = "awards.json";
pub const ACTIVITIES_FILE: &str = "activities.json";
pub const RESTRINGS_FILE: &str = "restrings.json";

const EMBEDDED: [(&str, &str); 8] = [
    (PROFILE_FILE, include_str!("../../../../assets/content/profile.json")),
    (
        PUBLICATIONS_FILE,
        include_str!("../../../../assets/content/publications.json"),
    ),
    (TALKS_FILE, include_str!("../../../../assets/content/talks.json")),
    (MEDIA_FILE, include_str!("../../../../assets/content/media.json")),
    (NEWS_FILE, include_str!("../../../../assets/content/news.json")),
    (AWARDS_FILE, include_str!("../../../../assets/content/awards.json")),
    (
        ACTIVITIES_FILE,
        include_str!("../../../../assets/content/activities.json"),
    ),
    (
        RESTRINGS_FILE,
        include_str!("../../../../assets/content/restrings.json"),
    ),
];

/// Who the site is about. `owner_names` are highlighted in author lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: LocalizedText,
    #[serde(default)]
    pub role: LocalizedText,
    #[serde(default, rename = "ownerNames")]
    pub owner_names: Vec<String>,
}

/// Every dataset, loaded once. Views copy or borrow from it and never write
/// back.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub profile: Profile,
    pub publications: Vec<Publication>,
    pub talks: Vec<Talk>,
    pub media: Vec<MediaItem>,
    pub news: PerLanguage<NewsItem>,
    pub awards: PerLanguage<Award>,
    pub activities: ActivityLog,
    pub restrings: Vec<Restring>,
}

impl Catalog {
    /// The datasets compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::load(|name| Ok(embedded(name).to_owned()))
    }

    /// Like [`Self::embedded`], but any file present in `dir` wins.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let directory = Directory::new(dir.to_path_buf());
        info!("loading content overrides from {}", dir.display());
        Self::load(|name| {
            if directory.has_file(name) {
                debug!("using {} from {}", name, dir.display());
                directory.get_file(name)
            } else {
                Ok(embedded(name).to_owned())
            }
        })
    }

    fn load(mut read: impl FnMut(&'static str) -> Result<String>) -> Result<Self> {
        let publications: Vec<Publication> = parse(&read(PUBLICATIONS_FILE)?)?;
        if publications.is_empty() {
            return Err(ContentError::Empty(PUBLICATIONS_FILE).into());
        }

        let raw_activities: BTreeMap<String, Vec<Activity>> = parse(&read(ACTIVITIES_FILE)?)?;
        let activities = ActivityLog::from_raw(ACTIVITIES_FILE, raw_activities)?;

        let catalog = Catalog {
            profile: parse(&read(PROFILE_FILE)?)?,
            publications,
            talks: parse(&read(TALKS_FILE)?)?,
            media: parse(&read(MEDIA_FILE)?)?,
            news: parse(&read(NEWS_FILE)?)?,
            awards: parse(&read(AWARDS_FILE)?)?,
            activities,
            restrings: parse(&read(RESTRINGS_FILE)?)?,
        };

        info!(
            "loaded {} publications, {} talks, {} media items, {} activity days",
            catalog.publications.len(),
            catalog.talks.len(),
            catalog.media.len(),
            catalog.activities.len()
        );

        Ok(catalog)
    }

    pub fn total_citations(&self) -> u32 {
        self.publications.iter().map(|p| p.citations).sum()
    }
}

fn embedded(name: &str) -> &'static str {
    EMBEDDED
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, contents)| *contents)
        .unwrap_or("")
}

fn parse<T: DeserializeOwned>(contents: &str) -> Result<T> {
    Ok(serde_json::from_str(contents)?)
}

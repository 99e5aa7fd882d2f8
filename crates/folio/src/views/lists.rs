use strum_macros::EnumIter;

use super::Paginated;
use crate::content::{Award, Catalog, MediaItem, NewsItem, Talk};
use crate::i18n::{Language, Localization};

/// The plain "show more" lists of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ListSection {
    Talks,
    News,
    Awards,
    Media,
}

impl ListSection {
    pub fn limit(self) -> usize {
        match self {
            ListSection::Talks => 3,
            ListSection::News => 4,
            ListSection::Awards => 3,
            ListSection::Media => 4,
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            ListSection::Talks => "talks-title",
            ListSection::News => "news-title",
            ListSection::Awards => "awards-title",
            ListSection::Media => "media-title",
        }
    }
}

/// Independent expansion flags, one per [`ListSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSections {
    talks: Paginated,
    news: Paginated,
    awards: Paginated,
    media: Paginated,
}

impl Default for ListSections {
    fn default() -> Self {
        Self {
            talks: Paginated::new(ListSection::Talks.limit()),
            news: Paginated::new(ListSection::News.limit()),
            awards: Paginated::new(ListSection::Awards.limit()),
            media: Paginated::new(ListSection::Media.limit()),
        }
    }
}

impl ListSections {
    pub fn get(&self, section: ListSection) -> &Paginated {
        match section {
            ListSection::Talks => &self.talks,
            ListSection::News => &self.news,
            ListSection::Awards => &self.awards,
            ListSection::Media => &self.media,
        }
    }

    fn get_mut(&mut self, section: ListSection) -> &mut Paginated {
        match section {
            ListSection::Talks => &mut self.talks,
            ListSection::News => &mut self.news,
            ListSection::Awards => &mut self.awards,
            ListSection::Media => &mut self.media,
        }
    }

    pub fn toggle(&mut self, section: ListSection) {
        self.get_mut(section).toggle();
    }

    pub fn talks<'a>(&self, catalog: &'a Catalog) -> &'a [Talk] {
        self.talks.slice(&catalog.talks)
    }

    pub fn media<'a>(&self, catalog: &'a Catalog) -> &'a [MediaItem] {
        self.media.slice(&catalog.media)
    }

    pub fn news<'a>(&self, catalog: &'a Catalog, language: Language) -> &'a [NewsItem] {
        self.news.slice(catalog.news.get(language))
    }

    pub fn awards<'a>(&self, catalog: &'a Catalog, language: Language) -> &'a [Award] {
        self.awards.slice(catalog.awards.get(language))
    }

    /// Total length of the list behind `section`.
    pub fn total(catalog: &Catalog, section: ListSection, language: Language) -> usize {
        match section {
            ListSection::Talks => catalog.talks.len(),
            ListSection::News => catalog.news.get(language).len(),
            ListSection::Awards => catalog.awards.get(language).len(),
            ListSection::Media => catalog.media.len(),
        }
    }
}

pub fn talk_title(talk: &Talk, language: Language) -> &str {
    talk.title.resolve(language)
}

pub fn talk_desc(talk: &Talk, language: Language) -> &str {
    talk.desc.resolve(language)
}

pub fn talk_year(talk: &Talk, language: Language) -> &str {
    talk.year.resolve(language)
}

pub fn media_title(item: &MediaItem, language: Language) -> &str {
    item.title.resolve(language)
}

/// Localized talk type, or the raw type when no label exists for it.
pub fn talk_type(talk: &Talk, i18n: &mut Localization) -> String {
    i18n.try_tr(&talk.type_key())
        .unwrap_or_else(|| talk.kind.clone())
}

use strum_macros::EnumIter;

/// The two top level pages, selected by a single fragment token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Portfolio,
    Personal,
}

impl Route {
    /// `personal` (with or without a leading `#`) selects the activity log;
    /// anything else, including nothing, is the portfolio.
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment.trim().trim_start_matches('#') {
            "personal" => Route::Personal,
            _ => Route::Portfolio,
        }
    }

    pub fn fragment(self) -> &'static str {
        match self {
            Route::Portfolio => "",
            Route::Personal => "personal",
        }
    }
}

/// Sections of the portfolio page that have a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Section {
    About,
    News,
    Publications,
    Talks,
    Awards,
    Media,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::News => "news",
            Section::Publications => "publications",
            Section::Talks => "talks",
            Section::Awards => "awards",
            Section::Media => "media",
        }
    }

    pub fn nav_key(self) -> &'static str {
        match self {
            Section::About => "nav-about",
            Section::News => "nav-news",
            Section::Publications => "nav-publications",
            Section::Talks => "nav-talks",
            Section::Awards => "nav-awards",
            Section::Media => "nav-media",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn fragments() {
        assert_eq!(Route::from_fragment("personal"), Route::Personal);
        assert_eq!(Route::from_fragment("#personal"), Route::Personal);
        assert_eq!(Route::from_fragment(""), Route::Portfolio);
        assert_eq!(Route::from_fragment("#publications"), Route::Portfolio);
        assert_eq!(Route::from_fragment("Personal"), Route::Portfolio);
    }
}

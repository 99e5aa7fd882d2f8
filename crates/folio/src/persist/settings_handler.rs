use tracing::{error, info};

use super::store::{PreferenceStore, StoredPreferences};
use crate::i18n::Language;
use crate::Theme;

const DEFAULT_LANGUAGE: Language = Language::En;

/// The resolved preference state. Always has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

/// Owns the preferences and writes them through the injected store on
/// every change.
pub struct SettingsHandler<S: PreferenceStore> {
    store: S,
    current: Preferences,
}

impl<S: PreferenceStore> SettingsHandler<S> {
    /// Read the store once. `system_theme` is what the host reports as its
    /// light/dark preference, used only when no theme was saved.
    pub fn load(store: S, system_theme: Option<Theme>) -> Self {
        let stored = store.load();
        let current = Preferences {
            language: stored.language.unwrap_or(DEFAULT_LANGUAGE),
            theme: stored.theme.or(system_theme).unwrap_or_default(),
        };
        info!(
            "loaded preferences language={} theme={}",
            current.language.code(), current.theme.as_str()
        );
        Self { store, current }
    }

    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn language(&self) -> Language {
        self.current.language
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.current.language.toggled());
        self.current.language
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.current.theme.toggled());
        self.current.theme
    }

    pub fn set_language(&mut self, language: Language) {
        self.current.language = language;
        self.try_save();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current.theme = theme;
        self.try_save();
    }

    /// Command line overrides. They apply to this run only and are not
    /// written back.
    pub fn override_session(&mut self, language: Option<Language>, theme: Option<Theme>) {
        if let Some(language) = language {
            self.current.language = language;
        }
        if let Some(theme) = theme {
            self.current.theme = theme;
        }
    }

    fn try_save(&mut self) {
        let stored = StoredPreferences {
            language: Some(self.current.language),
            theme: Some(self.current.theme),
        };
        if let Err(err) = self.store.save(stored) {
            error!("Could not save preferences: {err}");
        }
    }
}

use super::{IntlError, IntlKey, Language};
use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::negotiate_languages;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use strum::IntoEnumIterator;
use unic_langid::LanguageIdentifier;

struct StaticBundle {
    language: Language,
    ftl: &'static str,
}

const FTLS: [StaticBundle; 2] = [
    StaticBundle {
        language: Language::En,
        ftl: include_str!("../../../../assets/translations/en-US/main.ftl"),
    },
    StaticBundle {
        language: Language::Ja,
        ftl: include_str!("../../../../assets/translations/ja/main.ftl"),
    },
];

static MESSAGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([a-zA-Z][a-zA-Z0-9_-]*)\s*=").expect("message id regex"));

type Bundle = FluentBundle<FluentResource>;

/// Holds the translation tables and answers key lookups for the active
/// language.
pub struct Localization {
    current: Language,
    bundles: HashMap<Language, Bundle>,
    /// Cached string results per language (only for strings without arguments)
    string_cache: HashMap<Language, HashMap<String, String>>,
}

impl Default for Localization {
    fn default() -> Self {
        Self::with_isolating(true)
    }
}

impl Localization {
    pub fn new(language: Language) -> Self {
        let mut i18n = Self::default();
        i18n.current = language;
        i18n
    }

    /// Disable bidirectional isolation markers. mostly useful for tests
    pub fn no_bidi() -> Self {
        Self::with_isolating(false)
    }

    fn with_isolating(use_isolating: bool) -> Self {
        let mut bundles = HashMap::new();
        for ftl in &FTLS {
            let mut bundle = load_bundle(ftl);
            if !use_isolating {
                bundle.set_use_isolating(false);
            }
            bundles.insert(ftl.language, bundle);
        }

        Self {
            current: Language::FALLBACK,
            bundles,
            string_cache: HashMap::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    /// Switches the active table. Cached strings belong to the old language
    /// and are dropped.
    pub fn set_language(&mut self, language: Language) {
        if self.current == language {
            return;
        }
        tracing::info!("Switching language from {} to {}", self.current, language);
        self.current = language;
        self.string_cache.clear();
    }

    /// Strict lookup in the active language only.
    pub fn get_string(&mut self, id: IntlKey<'_>) -> Result<String, IntlError> {
        self.get_cached_string(self.current, id, None)
    }

    /// Total lookup: active language, then the fallback language, then the
    /// key text itself.
    pub fn tr(&mut self, key: &str) -> String {
        self.lookup(key, None)
    }

    pub fn tr_args(&mut self, key: &str, args: &FluentArgs) -> String {
        self.lookup(key, Some(args))
    }

    /// Like [`Self::tr`] but `None` when neither table has the key.
    pub fn try_tr(&mut self, key: &str) -> Option<String> {
        let id = IntlKey::new(key);
        self.get_cached_string(self.current, id, None)
            .or_else(|_| self.get_cached_string(Language::FALLBACK, id, None))
            .ok()
    }

    fn lookup(&mut self, key: &str, args: Option<&FluentArgs>) -> String {
        let id = IntlKey::new(key);
        match self.get_cached_string(self.current, id, args) {
            Ok(s) => s,
            Err(err) => {
                if self.current != Language::FALLBACK {
                    if let Ok(s) = self.get_cached_string(Language::FALLBACK, id, args) {
                        tracing::warn!("FALLBACK: '{}' missing in {}: {err}", key, self.current);
                        return s;
                    }
                }
                tracing::warn!("FALLBACK: Using key '{}' as string ({err})", key);
                key.to_owned()
            }
        }
    }

    fn get_cached_string(
        &mut self,
        language: Language,
        id: IntlKey<'_>,
        args: Option<&FluentArgs>,
    ) -> Result<String, IntlError> {
        if args.is_none() {
            if let Some(cached) = self
                .string_cache
                .get(&language)
                .and_then(|cache| cache.get(id.as_str()))
            {
                return Ok(cached.clone());
            }
        }

        let result = {
            let bundle = self
                .bundles
                .get(&language)
                .ok_or(IntlError::NoBundle(language))?;

            let message = bundle
                .get_message(id.as_str())
                .ok_or_else(|| IntlError::NotFound(id.to_string()))?;

            let pattern = message
                .value()
                .ok_or_else(|| IntlError::NoValue(id.to_string()))?;

            let mut errors = Vec::with_capacity(0);
            let result = bundle.format_pattern(pattern, args, &mut errors);

            if !errors.is_empty() {
                tracing::warn!("Localization errors for {}: {:?}", id, &errors);
            }

            result.to_string()
        };

        // Only cache simple strings without arguments
        if args.is_none() {
            self.string_cache
                .entry(language)
                .or_default()
                .insert(id.as_str().to_owned(), result.clone());
        }

        Ok(result)
    }

    /// Every message id defined in a language's table.
    pub fn message_ids(language: Language) -> BTreeSet<&'static str> {
        FTLS.iter()
            .filter(|ftl| ftl.language == language)
            .flat_map(|ftl| {
                MESSAGE_ID
                    .captures_iter(ftl.ftl)
                    .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            })
            .collect()
    }

    /// Keys present in one table but not the other, as `(language, key)`.
    pub fn missing_keys() -> Vec<(Language, &'static str)> {
        let all: BTreeSet<&'static str> = Language::iter().flat_map(Self::message_ids).collect();
        let mut missing = Vec::new();
        for language in Language::iter() {
            let ids = Self::message_ids(language);
            missing.extend(
                all.iter()
                    .filter(|key| !ids.contains(*key))
                    .map(|key| (language, *key)),
            );
        }
        missing
    }

    /// Negotiates the best language from a list of preferred locales
    pub fn negotiate(preferred: &[LanguageIdentifier]) -> Language {
        let available: Vec<LanguageIdentifier> =
            Language::iter().map(Language::identifier).collect();
        let fallback = Language::FALLBACK.identifier();
        let negotiated = negotiate_languages(
            preferred,
            &available,
            Some(&fallback),
            fluent_langneg::NegotiationStrategy::Filtering,
        );
        negotiated
            .first()
            .and_then(|id| Language::from_identifier(id))
            .unwrap_or(Language::FALLBACK)
    }

    /// Gets cache statistics for monitoring performance
    pub fn get_cache_stats(&self) -> CacheStats {
        CacheStats {
            bundle_count: self.bundles.len(),
            string_cache_size: self.string_cache.values().map(HashMap::len).sum(),
        }
    }
}

/// Load a fluent bundle from one of the static ftl files baked into the
/// binary. Parse errors are logged and the valid part of the file is kept.
fn load_bundle(ftl: &StaticBundle) -> Bundle {
    let lang = ftl.language.identifier();
    let mut bundle = FluentBundle::new(vec![lang.clone()]);
    let resource = match FluentResource::try_new(ftl.ftl.to_string()) {
        Ok(resource) => {
            tracing::debug!("loaded {} bundle OK!", lang);
            resource
        }
        Err((resource, errors)) => {
            for error in errors {
                tracing::error!("load_bundle ({lang}): {error}");
            }
            tracing::warn!("load_bundle ({}): loading bundle with errors", lang);
            resource
        }
    };

    if let Err(errs) = bundle.add_resource(resource) {
        for err in errs {
            tracing::error!("adding resource: {err}");
        }
    }

    bundle
}

/// Statistics about cache usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub bundle_count: usize,
    pub string_cache_size: usize,
}

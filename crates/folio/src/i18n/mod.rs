//! Internationalization (i18n) for folio
//!
//! Two static fluent bundles (English and Japanese) are compiled into the
//! binary. Lookups are plain key → string; a key missing from the active
//! language falls back to English, and a key missing everywhere renders as
//! the key itself.

mod error;
mod key;
mod language;
pub mod manager;

pub use error::IntlError;
pub use key::IntlKey;
pub use language::Language;
pub use manager::{CacheStats, Localization};

/// Re-export commonly used types for convenience
pub use fluent::FluentArgs;
pub use fluent::FluentValue;
pub use unic_langid::LanguageIdentifier;

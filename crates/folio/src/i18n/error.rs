use super::Language;

/// Why a strict lookup failed. [`Localization::tr`](super::Localization::tr)
/// turns all of these into a fallback.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntlError {
    #[error("message not found: {0}")]
    NotFound(String),

    #[error("message has no value: {0}")]
    NoValue(String),

    #[error("no table for '{0}'")]
    NoBundle(Language),
}

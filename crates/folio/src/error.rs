use std::io;

use crate::i18n::IntlError;

/// Folio related errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content error: {0}")]
    Content(ContentError),

    #[error("localization error: {0}")]
    Intl(#[from] IntlError),
}

/// Problems found while loading a static dataset
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{file}: activity key '{key}' is not a YYYY-MM-DD date")]
    BadActivityDate { file: &'static str, key: String },

    #[error("{0}: dataset is empty")]
    Empty(&'static str),
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

#![forbid(unsafe_code)]

//! Error type shared by the core and the web binding.
//!
//! Nothing here is ever shown to a visitor. Host failures are logged and the
//! affected step is skipped; only a bad configuration is reported back to
//! the embedding page at init time.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("unsupported language code: {code:?}")]
    UnknownLanguage { code: String },

    #[error("preference storage failed: {message}")]
    Storage { message: String },

    #[error("navigation to {href} failed: {message}")]
    Navigation { href: String, message: String },

    #[error("DOM operation failed: {message}")]
    Dom { message: String },
}

impl SiteError {
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn navigation(href: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Navigation {
            href: href.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

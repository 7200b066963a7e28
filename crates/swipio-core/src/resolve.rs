#![forbid(unsafe_code)]

//! Active-language resolution.
//!
//! Sources are consulted in a fixed order and the first one that yields a
//! supported language wins:
//!
//! 1. the code embedded in the URL (`/pages/<code>/`),
//! 2. the stored preference,
//! 3. the browser's ordered locale list (primary subtag only),
//! 4. English.
//!
//! Everything here is a pure function of its inputs; the host traits in
//! [`crate::host`] supply the inputs.

use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::lang::Lang;

/// Which source produced the resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangSource {
    Path,
    Stored,
    Browser,
    Default,
}

/// Outcome of the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub lang: Lang,
    pub source: LangSource,
}

/// Lowercased primary language subtag of a BCP 47-ish locale string.
///
/// `"pt-BR"` and `"pt_BR"` both give `"pt"`. Strings that are not language
/// identifiers at all fall back to whatever precedes the first `-`.
#[must_use]
pub fn primary_subtag(locale: &str) -> String {
    match locale.parse::<LanguageIdentifier>() {
        Ok(id) => id.language.to_string(),
        Err(_) => locale
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase(),
    }
}

/// First supported language in the browser's preference list.
#[must_use]
pub fn browser_lang<S: AsRef<str>>(locales: &[S]) -> Option<Lang> {
    locales
        .iter()
        .find_map(|locale| Lang::from_code(&primary_subtag(locale.as_ref())))
}

/// [`browser_lang`], defaulting to English.
#[must_use]
pub fn detect_browser_lang<S: AsRef<str>>(locales: &[S]) -> Lang {
    browser_lang(locales).unwrap_or(Lang::DEFAULT)
}

/// Run the full priority chain.
#[must_use]
pub fn resolve_language<S: AsRef<str>>(
    path_lang: Option<Lang>,
    stored: Option<&str>,
    locales: &[S],
) -> Resolution {
    let resolution = if let Some(lang) = path_lang {
        Resolution {
            lang,
            source: LangSource::Path,
        }
    } else if let Some(lang) = stored.and_then(Lang::from_code) {
        Resolution {
            lang,
            source: LangSource::Stored,
        }
    } else if let Some(lang) = browser_lang(locales) {
        Resolution {
            lang,
            source: LangSource::Browser,
        }
    } else {
        Resolution {
            lang: Lang::DEFAULT,
            source: LangSource::Default,
        }
    };
    debug!(lang = %resolution.lang, source = ?resolution.source, "resolved language");
    resolution
}

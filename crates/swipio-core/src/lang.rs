#![forbid(unsafe_code)]

//! Supported languages and their static lookup tables.
//!
//! The set is closed: a [`Lang`] value is always one of the 21 languages the
//! site ships pages for, so anything derived from it (flag, label, badge,
//! document path) needs no further validation. Raw strings from storage,
//! the URL, or the DOM enter through [`Lang::from_code`] or
//! [`effective_lang`].

use core::fmt;
use core::str::FromStr;

use crate::error::SiteError;

/// A language the landing page is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    Cs,
    Da,
    De,
    En,
    Es,
    Fi,
    Fr,
    Ga,
    Hi,
    It,
    Ja,
    Ko,
    Nl,
    No,
    Pl,
    Pt,
    Ro,
    Sv,
    Tr,
    Uk,
    Zh,
}

/// Flag id used when a raw code has no table entry.
pub const FALLBACK_FLAG: &str = "gb";
/// Label used when a raw code has no table entry.
pub const FALLBACK_LABEL: &str = "English";

impl Lang {
    /// Language served at the site root.
    pub const DEFAULT: Self = Self::En;

    /// Every supported language, ordered by code.
    pub const ALL: [Self; 21] = [
        Self::Cs,
        Self::Da,
        Self::De,
        Self::En,
        Self::Es,
        Self::Fi,
        Self::Fr,
        Self::Ga,
        Self::Hi,
        Self::It,
        Self::Ja,
        Self::Ko,
        Self::Nl,
        Self::No,
        Self::Pl,
        Self::Pt,
        Self::Ro,
        Self::Sv,
        Self::Tr,
        Self::Uk,
        Self::Zh,
    ];

    /// Two-letter lowercase code, as used in URLs and storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::Da => "da",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fi => "fi",
            Self::Fr => "fr",
            Self::Ga => "ga",
            Self::Hi => "hi",
            Self::It => "it",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Nl => "nl",
            Self::No => "no",
            Self::Pl => "pl",
            Self::Pt => "pt",
            Self::Ro => "ro",
            Self::Sv => "sv",
            Self::Tr => "tr",
            Self::Uk => "uk",
            Self::Zh => "zh",
        }
    }

    /// Flag icon id (file stem under `assets/flags/`).
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Cs => "cz",
            Self::Da => "dk",
            Self::De => "de",
            Self::En => "gb",
            Self::Es => "es",
            Self::Fi => "fi",
            Self::Fr => "fr",
            Self::Ga => "ie",
            Self::Hi => "in",
            Self::It => "it",
            Self::Ja => "jp",
            Self::Ko => "kr",
            Self::Nl => "nl",
            Self::No => "no",
            Self::Pl => "pl",
            Self::Pt => "pt",
            Self::Ro => "ro",
            Self::Sv => "se",
            Self::Tr => "tr",
            Self::Uk => "ua",
            Self::Zh => "cn",
        }
    }

    /// Native display name shown on the picker trigger.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cs => "Čeština",
            Self::Da => "Dansk",
            Self::De => "Deutsch",
            Self::En => "English",
            Self::Es => "Español",
            Self::Fi => "Suomi",
            Self::Fr => "Français",
            Self::Ga => "Gaeilge",
            Self::Hi => "हिन्दी",
            Self::It => "Italiano",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::Nl => "Nederlands",
            Self::No => "Norsk",
            Self::Pl => "Polski",
            Self::Pt => "Português",
            Self::Ro => "Română",
            Self::Sv => "Svenska",
            Self::Tr => "Türkçe",
            Self::Uk => "Українська",
            Self::Zh => "中文",
        }
    }

    /// Exact, case-sensitive lookup of a two-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SiteError::UnknownLanguage { code: s.to_owned() })
    }
}

/// Map any string onto a supported language, defaulting to English.
#[must_use]
pub fn effective_lang(code: &str) -> Lang {
    Lang::from_code(code).unwrap_or(Lang::DEFAULT)
}

/// Flag id for a raw code, or the English flag when the code is unknown.
#[must_use]
pub fn flag_for_code(code: &str) -> &'static str {
    Lang::from_code(code).map_or(FALLBACK_FLAG, Lang::flag)
}

/// Display label for a raw code, or `English` when the code is unknown.
#[must_use]
pub fn label_for_code(code: &str) -> &'static str {
    Lang::from_code(code).map_or(FALLBACK_LABEL, Lang::label)
}

// ---------------------------------------------------------------------------
// Store badges
// ---------------------------------------------------------------------------

/// App marketplace whose download badge appears on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marketplace {
    AppStore,
    GooglePlay,
}

impl Marketplace {
    pub const ALL: [Self; 2] = [Self::AppStore, Self::GooglePlay];

    /// Directory under `assets/store/`. Also the substring that identifies
    /// this marketplace's badge images by their initial `src`.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::AppStore => "app-store",
            Self::GooglePlay => "google-play",
        }
    }

    /// Whether a localized badge exists for `lang`.
    ///
    /// Google Play ships every language; the App Store has no Irish badge.
    #[must_use]
    pub const fn supports(self, lang: Lang) -> bool {
        match self {
            Self::AppStore => !matches!(lang, Lang::Ga),
            Self::GooglePlay => true,
        }
    }

    /// Language whose badge should be shown for `lang`.
    #[must_use]
    pub const fn badge_lang(self, lang: Lang) -> Lang {
        if self.supports(lang) {
            lang
        } else {
            Lang::DEFAULT
        }
    }
}

// ---------------------------------------------------------------------------
// Legal documents
// ---------------------------------------------------------------------------

/// Legal document linked from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalDoc {
    Terms,
    Privacy,
}

impl LegalDoc {
    pub const ALL: [Self; 2] = [Self::Terms, Self::Privacy];

    /// Value of the anchor's `data-doc` attribute.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Terms => "tos",
            Self::Privacy => "privacy",
        }
    }

    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Terms => "tos.html",
            Self::Privacy => "privacy.html",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|doc| doc.id() == id)
    }

    /// Whether the translated document set covers `lang`.
    #[must_use]
    pub const fn available_in(self, _lang: Lang) -> bool {
        true
    }

    /// Language of the document to link for `lang`.
    #[must_use]
    pub const fn doc_lang(self, lang: Lang) -> Lang {
        if self.available_in(lang) {
            lang
        } else {
            Lang::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_two_letter_lowercase() {
        let mut seen = HashSet::new();
        for lang in Lang::ALL {
            let code = lang.code();
            assert_eq!(code.len(), 2);
            assert!(code.bytes().all(|b| b.is_ascii_lowercase()), "{code}");
            assert!(seen.insert(code), "duplicate code {code}");
        }
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn all_is_sorted_by_code() {
        let codes: Vec<_> = Lang::ALL.iter().map(|l| l.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn from_code_round_trips_every_language() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn from_code_is_case_sensitive() {
        assert_eq!(Lang::from_code("DE"), None);
        assert_eq!(Lang::from_code("De"), None);
        assert_eq!(Lang::from_code(""), None);
        assert_eq!(Lang::from_code("deu"), None);
    }

    #[test]
    fn parse_reports_unknown_code() {
        let err = "xx".parse::<Lang>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownLanguage { ref code } if code == "xx"));
        assert_eq!("sv".parse::<Lang>().unwrap(), Lang::Sv);
    }

    #[test]
    fn effective_lang_falls_back_to_english() {
        assert_eq!(effective_lang("ja"), Lang::Ja);
        assert_eq!(effective_lang("klingon"), Lang::En);
        assert_eq!(effective_lang(""), Lang::En);
    }

    #[test]
    fn flag_table_spot_checks() {
        assert_eq!(Lang::En.flag(), "gb");
        assert_eq!(Lang::Ga.flag(), "ie");
        assert_eq!(Lang::Uk.flag(), "ua");
        assert_eq!(Lang::Zh.flag(), "cn");
        assert_eq!(Lang::Sv.flag(), "se");
    }

    #[test]
    fn raw_lookups_fall_back_to_english_entries() {
        assert_eq!(flag_for_code("xx"), "gb");
        assert_eq!(label_for_code("xx"), "English");
        assert_eq!(flag_for_code("cs"), "cz");
        assert_eq!(label_for_code("fr"), "Français");
    }

    #[test]
    fn app_store_lacks_only_irish() {
        let missing: Vec<_> = Lang::ALL
            .into_iter()
            .filter(|&l| !Marketplace::AppStore.supports(l))
            .collect();
        assert_eq!(missing, vec![Lang::Ga]);
        assert!(Lang::ALL.into_iter().all(|l| Marketplace::GooglePlay.supports(l)));
    }

    #[test]
    fn badge_lang_substitutes_english_per_marketplace() {
        assert_eq!(Marketplace::AppStore.badge_lang(Lang::Ga), Lang::En);
        assert_eq!(Marketplace::GooglePlay.badge_lang(Lang::Ga), Lang::Ga);
        assert_eq!(Marketplace::AppStore.badge_lang(Lang::Ko), Lang::Ko);
    }

    #[test]
    fn legal_doc_ids_and_files() {
        assert_eq!(LegalDoc::from_id("tos"), Some(LegalDoc::Terms));
        assert_eq!(LegalDoc::from_id("privacy"), Some(LegalDoc::Privacy));
        assert_eq!(LegalDoc::from_id("cookies"), None);
        assert_eq!(LegalDoc::Terms.filename(), "tos.html");
        assert_eq!(LegalDoc::Privacy.filename(), "privacy.html");
    }

    #[test]
    fn documents_exist_in_every_language() {
        for doc in LegalDoc::ALL {
            for lang in Lang::ALL {
                assert_eq!(doc.doc_lang(lang), lang);
            }
        }
    }
}

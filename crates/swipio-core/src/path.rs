#![forbid(unsafe_code)]

//! Page location and relative URL generation.
//!
//! English lives at the site root; every other language is served from
//! `<pages base><code>/` (by default `pages/de/`, `pages/fr/`, ...). Pages
//! inside that folder sit one directory below the base, so every asset,
//! document and navigation URL built here climbs back with one `../` per
//! folder (`../../` for the default base) and is left bare at the root.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::lang::{Lang, LegalDoc, Marketplace};

/// Prefix that climbs from `pages/<code>/` back to the site root.
pub const NESTED_PREFIX: &str = "../../";

/// Where the current page sits relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    lang: Option<Lang>,
    pages_base: String,
    prefix: String,
}

impl PathContext {
    /// Context for a page at the site root.
    #[must_use]
    pub fn root(pages_base: impl Into<String>) -> Self {
        Self {
            lang: None,
            pages_base: pages_base.into(),
            prefix: String::new(),
        }
    }

    /// Inspect `pathname` (e.g. `/pages/de/index.html`).
    ///
    /// The folder segment is matched case-insensitively but the code must be
    /// an exact supported code; `/pages/DE/` is treated as a root page.
    #[must_use]
    pub fn from_pathname(pathname: &str, pages_base: &str) -> Self {
        let lang = pages_regex(pages_base)
            .and_then(|re| re.captures(pathname))
            .and_then(|caps| caps.get(1))
            .and_then(|code| Lang::from_code(code.as_str()));
        let prefix = match lang {
            Some(_) => nested_prefix(pages_base),
            None => String::new(),
        };
        trace!(pathname, ?lang, prefix = %prefix, "path context");
        Self {
            lang,
            pages_base: pages_base.to_owned(),
            prefix,
        }
    }

    /// Language embedded in the URL, when the page is inside the pages folder.
    #[must_use]
    pub const fn lang(&self) -> Option<Lang> {
        self.lang
    }

    #[must_use]
    pub const fn in_pages_folder(&self) -> bool {
        self.lang.is_some()
    }

    #[must_use]
    pub fn pages_base(&self) -> &str {
        &self.pages_base
    }

    /// Relative prefix that reaches the site root from this page.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `<prefix>assets/flags/<flag>.svg`
    #[must_use]
    pub fn flag_src(&self, lang: Lang) -> String {
        self.flag_src_for_id(lang.flag())
    }

    /// Same as [`Self::flag_src`] for an already-resolved flag id.
    #[must_use]
    pub fn flag_src_for_id(&self, flag: &str) -> String {
        format!("{}assets/flags/{flag}.svg", self.prefix())
    }

    /// `<prefix>docs/<lang>/<filename>`
    #[must_use]
    pub fn doc_href(&self, doc: LegalDoc, lang: Lang) -> String {
        format!(
            "{}docs/{}/{}",
            self.prefix(),
            doc.doc_lang(lang),
            doc.filename()
        )
    }

    /// `<prefix>assets/store/<marketplace>/<lang>.svg`, English when the
    /// marketplace has no badge for `lang`.
    #[must_use]
    pub fn badge_src(&self, market: Marketplace, lang: Lang) -> String {
        format!(
            "{}assets/store/{}/{}.svg",
            self.prefix(),
            market.dir(),
            market.badge_lang(lang)
        )
    }

    /// Landing page URL for `lang`, relative to this page.
    #[must_use]
    pub fn lang_home_href(&self, lang: Lang) -> String {
        if lang.is_default() {
            if self.in_pages_folder() {
                self.prefix.clone()
            } else {
                "/".to_owned()
            }
        } else {
            format!("{}{}{}/", self.prefix(), self.pages_base, lang)
        }
    }
}

/// Folders in `pages_base` (`"pages/"` is one, `"intl/pages/"` two).
#[must_use]
pub fn base_depth(pages_base: &str) -> usize {
    pages_base.split('/').filter(|seg| !seg.is_empty()).count()
}

/// One `../` for every base folder plus the language folder.
fn nested_prefix(pages_base: &str) -> String {
    "../".repeat(base_depth(pages_base) + 1)
}

/// `^/<base>/([a-z]{2})(?:/|$)`, case-insensitive.
fn pages_regex(pages_base: &str) -> Option<Regex> {
    let base = pages_base.strip_suffix('/').unwrap_or(pages_base);
    let pattern = format!("^/{}/([a-z]{{2}})(?:/|$)", regex::escape(base));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "pages/";

    #[test]
    fn root_page_has_no_prefix() {
        let ctx = PathContext::from_pathname("/", BASE);
        assert_eq!(ctx.lang(), None);
        assert_eq!(ctx.prefix(), "");
        assert_eq!(ctx, PathContext::root(BASE));
    }

    #[test]
    fn nested_page_extracts_code() {
        for path in ["/pages/de/", "/pages/de", "/pages/de/index.html"] {
            let ctx = PathContext::from_pathname(path, BASE);
            assert_eq!(ctx.lang(), Some(Lang::De), "{path}");
            assert_eq!(ctx.prefix(), "../../");
        }
    }

    #[test]
    fn unsupported_or_malformed_segments_are_root() {
        for path in [
            "/pages/xx/",
            "/pages/deu/",
            "/pages/",
            "/pages",
            "/other/de/",
            "pages/de/",
            "/pages/DE/",
            "/index.html",
            "",
        ] {
            let ctx = PathContext::from_pathname(path, BASE);
            assert_eq!(ctx.lang(), None, "{path}");
            assert_eq!(ctx.prefix(), "", "{path}");
        }
    }

    #[test]
    fn folder_name_matches_case_insensitively() {
        let ctx = PathContext::from_pathname("/PAGES/fr/", BASE);
        assert_eq!(ctx.lang(), Some(Lang::Fr));
    }

    #[test]
    fn custom_base_is_escaped() {
        let ctx = PathContext::from_pathname("/l.10n/ja/", "l.10n/");
        assert_eq!(ctx.lang(), Some(Lang::Ja));
        let ctx = PathContext::from_pathname("/lx10n/ja/", "l.10n/");
        assert_eq!(ctx.lang(), None);
    }

    #[test]
    fn asset_urls_follow_prefix() {
        let root = PathContext::root(BASE);
        let nested = PathContext::from_pathname("/pages/it/", BASE);
        assert_eq!(root.flag_src(Lang::Ja), "assets/flags/jp.svg");
        assert_eq!(nested.flag_src(Lang::Ja), "../../assets/flags/jp.svg");
        assert_eq!(
            nested.doc_href(LegalDoc::Privacy, Lang::It),
            "../../docs/it/privacy.html"
        );
        assert_eq!(root.doc_href(LegalDoc::Terms, Lang::En), "docs/en/tos.html");
    }

    #[test]
    fn irish_badges_split_by_marketplace() {
        let root = PathContext::root(BASE);
        assert_eq!(
            root.badge_src(Marketplace::AppStore, Lang::Ga),
            "assets/store/app-store/en.svg"
        );
        assert_eq!(
            root.badge_src(Marketplace::GooglePlay, Lang::Ga),
            "assets/store/google-play/ga.svg"
        );
    }

    #[test]
    fn home_hrefs() {
        let root = PathContext::root(BASE);
        let nested = PathContext::from_pathname("/pages/de/", BASE);
        assert_eq!(root.lang_home_href(Lang::Fr), "pages/fr/");
        assert_eq!(root.lang_home_href(Lang::En), "/");
        assert_eq!(nested.lang_home_href(Lang::En), "../../");
        assert_eq!(nested.lang_home_href(Lang::Fr), "../../pages/fr/");
    }

    #[test]
    fn default_base_prefix_is_nested_prefix() {
        let nested = PathContext::from_pathname("/pages/pt/", BASE);
        assert_eq!(nested.prefix(), NESTED_PREFIX);
    }

    #[test]
    fn deeper_base_climbs_every_folder() {
        let base = "intl/pages/";
        assert_eq!(base_depth(base), 2);
        let nested = PathContext::from_pathname("/intl/pages/de/", base);
        assert_eq!(nested.lang(), Some(Lang::De));
        assert_eq!(nested.prefix(), "../../../");
        assert_eq!(nested.flag_src(Lang::De), "../../../assets/flags/de.svg");
        assert_eq!(
            nested.badge_src(Marketplace::GooglePlay, Lang::De),
            "../../../assets/store/google-play/de.svg"
        );
        assert_eq!(
            nested.doc_href(LegalDoc::Terms, Lang::De),
            "../../../docs/de/tos.html"
        );
        assert_eq!(nested.lang_home_href(Lang::En), "../../../");
        assert_eq!(nested.lang_home_href(Lang::Fr), "../../../intl/pages/fr/");

        let root = PathContext::from_pathname("/pages/de/", base);
        assert_eq!(root.prefix(), "");
        assert_eq!(root.lang_home_href(Lang::Fr), "intl/pages/fr/");
    }
}

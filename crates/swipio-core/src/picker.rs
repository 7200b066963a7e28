#![forbid(unsafe_code)]

//! Language picker: dropdown state machine and controller.
//!
//! [`PickerState`] is the pure open/closed machine. [`LanguagePicker`] owns
//! one, together with the page's [`PathContext`], a [`PreferenceStore`] and a
//! [`PageNavigator`], and carries out the persistence and navigation side of
//! each transition. DOM updates are left to the caller, which receives a
//! [`PickerTransition`] for dropdown changes and a [`PickerView`] for the
//! language-dependent parts of the page.

use tracing::{debug, warn};

use crate::config::PickerConfig;
use crate::host::{LocaleSource, PageNavigator, PreferenceStore};
use crate::lang::{Lang, LegalDoc, Marketplace};
use crate::path::PathContext;
use crate::resolve::{Resolution, resolve_language};

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// User input the dropdown reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Click on the trigger button. The host must keep this click from
    /// reaching the document-level handler.
    TriggerClicked,
    /// Click on an option; carries its raw `data-lang` value.
    OptionChosen(String),
    /// Click anywhere else in the document.
    DocumentClicked,
}

/// Side effect requested by a transition, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEffect {
    Open,
    Close,
    Persist(Lang),
    Navigate(Lang),
}

/// Result of feeding one event to [`PickerState::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickerTransition {
    pub was_open: bool,
    pub is_open: bool,
    pub effects: Vec<PickerEffect>,
}

impl PickerTransition {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }

    /// Open/closed state to render, when it needs rendering.
    #[must_use]
    pub fn dropdown_update(&self) -> Option<bool> {
        self.effects.iter().rev().find_map(|effect| match effect {
            PickerEffect::Open => Some(true),
            PickerEffect::Close => Some(false),
            _ => None,
        })
    }
}

/// Dropdown open/closed state. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerState {
    open: bool,
}

impl PickerState {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn dispatch(&mut self, event: &PickerEvent) -> PickerTransition {
        let was_open = self.open;
        let effects = match event {
            PickerEvent::TriggerClicked => {
                self.open = !self.open;
                vec![if self.open {
                    PickerEffect::Open
                } else {
                    PickerEffect::Close
                }]
            }
            PickerEvent::OptionChosen(code) => {
                self.open = false;
                match Lang::from_code(code) {
                    Some(lang) => vec![
                        PickerEffect::Persist(lang),
                        PickerEffect::Close,
                        PickerEffect::Navigate(lang),
                    ],
                    None => {
                        debug!(code = %code, "ignoring option with unsupported language");
                        vec![PickerEffect::Close]
                    }
                }
            }
            PickerEvent::DocumentClicked => {
                if self.open {
                    self.open = false;
                    vec![PickerEffect::Close]
                } else {
                    Vec::new()
                }
            }
        };
        PickerTransition {
            was_open,
            is_open: self.open,
            effects,
        }
    }
}

// ---------------------------------------------------------------------------
// Render plan
// ---------------------------------------------------------------------------

/// Language-dependent values to write into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub lang: Lang,
    /// Value for `<html lang>`.
    pub html_lang: &'static str,
    pub flag_src: String,
    pub label: &'static str,
    pub app_store_badge: String,
    pub google_play_badge: String,
    terms_href: String,
    privacy_href: String,
}

impl PickerView {
    #[must_use]
    pub fn new(ctx: &PathContext, lang: Lang) -> Self {
        Self {
            lang,
            html_lang: lang.code(),
            flag_src: ctx.flag_src(lang),
            label: lang.label(),
            app_store_badge: ctx.badge_src(Marketplace::AppStore, lang),
            google_play_badge: ctx.badge_src(Marketplace::GooglePlay, lang),
            terms_href: ctx.doc_href(LegalDoc::Terms, lang),
            privacy_href: ctx.doc_href(LegalDoc::Privacy, lang),
        }
    }

    #[must_use]
    pub fn doc_href(&self, doc: LegalDoc) -> &str {
        match doc {
            LegalDoc::Terms => &self.terms_href,
            LegalDoc::Privacy => &self.privacy_href,
        }
    }

    /// `href` for an anchor with the given `data-doc`; `None` for unknown ids.
    #[must_use]
    pub fn doc_href_for_id(&self, id: &str) -> Option<&str> {
        LegalDoc::from_id(id).map(|doc| self.doc_href(doc))
    }

    #[must_use]
    pub fn badge_src(&self, market: Marketplace) -> &str {
        match market {
            Marketplace::AppStore => &self.app_store_badge,
            Marketplace::GooglePlay => &self.google_play_badge,
        }
    }

    /// `aria-selected` for an option with the given `data-lang`.
    #[must_use]
    pub fn option_selected(&self, code: &str) -> bool {
        code == self.lang.code()
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct LanguagePicker<S, N> {
    config: PickerConfig,
    ctx: PathContext,
    state: PickerState,
    store: S,
    navigator: N,
    current: Option<Lang>,
}

impl<S: PreferenceStore, N: PageNavigator> LanguagePicker<S, N> {
    #[must_use]
    pub fn new(config: PickerConfig, pathname: &str, store: S, navigator: N) -> Self {
        let ctx = PathContext::from_pathname(pathname, &config.pages_base);
        Self {
            config,
            ctx,
            state: PickerState::new(),
            store,
            navigator,
            current: None,
        }
    }

    #[must_use]
    pub fn path_context(&self) -> &PathContext {
        &self.ctx
    }

    #[must_use]
    pub const fn state(&self) -> PickerState {
        self.state
    }

    /// Language resolved by the last [`Self::boot`].
    #[must_use]
    pub const fn current(&self) -> Option<Lang> {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Resolve the page language, persist it when nothing (or an empty
    /// string) is stored yet, and return what to render.
    pub fn boot(&mut self, locales: &impl LocaleSource) -> PickerView {
        let stored = self.store.load(&self.config.storage_key);
        let Resolution { lang, source } =
            resolve_language(self.ctx.lang(), stored.as_deref(), &locales.languages());
        if stored.as_deref().is_none_or(str::is_empty) {
            debug!(lang = %lang, ?source, "persisting first-load language");
            self.persist(lang);
        }
        self.current = Some(lang);
        self.view(lang)
    }

    #[must_use]
    pub fn view(&self, lang: Lang) -> PickerView {
        PickerView::new(&self.ctx, lang)
    }

    /// Feed a user event, carry out persistence and navigation, and return
    /// the transition for the caller to render.
    pub fn handle(&mut self, event: &PickerEvent) -> PickerTransition {
        let transition = self.state.dispatch(event);
        for effect in &transition.effects {
            match *effect {
                PickerEffect::Persist(lang) => self.persist(lang),
                PickerEffect::Navigate(lang) => self.navigate(lang),
                PickerEffect::Open | PickerEffect::Close => {}
            }
        }
        transition
    }

    fn persist(&mut self, lang: Lang) {
        if let Err(err) = self.store.save(&self.config.storage_key, lang.code()) {
            warn!(%err, "could not persist language preference");
        }
    }

    fn navigate(&mut self, lang: Lang) {
        let href = self.ctx.lang_home_href(lang);
        debug!(%href, "switching language");
        if let Err(err) = self.navigator.navigate(&href) {
            warn!(%err, "language navigation failed");
        }
    }
}

#![forbid(unsafe_code)]

//! Language picker wiring.
//!
//! The picker's state lives in one [`LanguagePicker`] shared by the click
//! handlers; the DOM is only ever written from a [`PickerView`] or a
//! transition's dropdown update, never read back for state.

use std::cell::RefCell;
use std::rc::Rc;

use swipio_core::config::PickerConfig;
use swipio_core::error::Result;
use swipio_core::host::{LocaleSource, LocationProvider};
use swipio_core::lang::Marketplace;
use swipio_core::picker::{LanguagePicker, PickerEvent, PickerTransition, PickerView};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::dom::{by_id, dom_error, query_all, query_document, set_attr, set_bool_attr, set_class};
use crate::hosts::{BrowserLocales, BrowserLocation, BrowserNavigator, BrowserStore};

type BrowserPicker = LanguagePicker<BrowserStore, BrowserNavigator>;

/// Every element the picker touches, looked up once at boot.
struct PickerElements {
    html: Option<Element>,
    dropdown: Option<Element>,
    trigger: Option<Element>,
    trigger_flag: Option<Element>,
    trigger_label: Option<Element>,
    panel: Option<Element>,
    options: Vec<Element>,
    doc_links: Vec<Element>,
    app_store_badges: Vec<Element>,
    google_play_badges: Vec<Element>,
    open_class: String,
}

impl PickerElements {
    fn collect(doc: &Document, config: &PickerConfig) -> Self {
        let panel = by_id(doc, &config.panel_id);
        let options = panel
            .as_ref()
            .map(|panel| query_all(panel, &config.option_selector))
            .unwrap_or_default();
        Self {
            html: doc.document_element(),
            dropdown: by_id(doc, &config.dropdown_id),
            trigger: by_id(doc, &config.trigger_id),
            trigger_flag: by_id(doc, &config.trigger_flag_id),
            trigger_label: by_id(doc, &config.trigger_label_id),
            panel,
            options,
            doc_links: query_document(doc, &config.doc_link_selector),
            app_store_badges: query_document(
                doc,
                &config.badge_query(Marketplace::AppStore.dir()),
            ),
            google_play_badges: query_document(
                doc,
                &config.badge_query(Marketplace::GooglePlay.dir()),
            ),
            open_class: config.open_class.clone(),
        }
    }

    fn badges(&self, market: Marketplace) -> &[Element] {
        match market {
            Marketplace::AppStore => &self.app_store_badges,
            Marketplace::GooglePlay => &self.google_play_badges,
        }
    }

    /// Trigger, option selection, badges, legal links and `<html lang>`.
    fn render_view(&self, view: &PickerView) {
        if let Some(html) = &self.html {
            set_attr(html, "lang", view.html_lang);
        }
        if let Some(flag) = &self.trigger_flag {
            set_attr(flag, "src", &view.flag_src);
        }
        if let Some(label) = &self.trigger_label {
            label.set_text_content(Some(view.label));
        }
        for option in &self.options {
            let code = option.get_attribute("data-lang").unwrap_or_default();
            set_bool_attr(option, "aria-selected", view.option_selected(&code));
        }
        for market in Marketplace::ALL {
            for img in self.badges(market) {
                set_attr(img, "src", view.badge_src(market));
            }
        }
        for link in &self.doc_links {
            let href = link
                .get_attribute("data-doc")
                .and_then(|id| view.doc_href_for_id(&id).map(str::to_owned));
            if let Some(href) = href {
                set_attr(link, "href", &href);
            }
        }
    }

    fn render_dropdown(&self, open: bool) {
        if let Some(dropdown) = &self.dropdown {
            set_class(dropdown, &self.open_class, open);
        }
        if let Some(trigger) = &self.trigger {
            set_bool_attr(trigger, "aria-expanded", open);
        }
        if let Some(panel) = &self.panel {
            set_bool_attr(panel, "aria-hidden", !open);
        }
    }

    fn render_transition(&self, transition: &PickerTransition) {
        if let Some(open) = transition.dropdown_update() {
            self.render_dropdown(open);
        }
    }
}

fn listen(target: &EventTarget, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|err| dom_error(&err))?;
    closure.forget();
    Ok(())
}

pub(crate) fn init_language_picker(
    window: &Window,
    doc: &Document,
    config: &PickerConfig,
) -> Result<()> {
    let elements = Rc::new(PickerElements::collect(doc, config));
    let pathname = BrowserLocation::new(window).pathname();
    let mut picker = LanguagePicker::new(
        config.clone(),
        &pathname,
        BrowserStore::new(window),
        BrowserNavigator::new(window),
    );

    let locales = BrowserLocales::new(window);
    debug!(locales = ?locales.languages(), pathname = %pathname, "booting language picker");
    let view = picker.boot(&locales);
    elements.render_view(&view);

    let picker: Rc<RefCell<BrowserPicker>> = Rc::new(RefCell::new(picker));

    if let Some(trigger) = &elements.trigger {
        let picker = Rc::clone(&picker);
        let els = Rc::clone(&elements);
        listen(trigger, move |event: Event| {
            event.stop_propagation();
            let transition = picker.borrow_mut().handle(&PickerEvent::TriggerClicked);
            els.render_transition(&transition);
        })?;
    }

    for option in &elements.options {
        let code = option.get_attribute("data-lang").unwrap_or_default();
        let picker = Rc::clone(&picker);
        let els = Rc::clone(&elements);
        listen(option, move |_event: Event| {
            let transition = picker
                .borrow_mut()
                .handle(&PickerEvent::OptionChosen(code.clone()));
            els.render_transition(&transition);
        })?;
    }

    let els = Rc::clone(&elements);
    listen(doc, move |_event: Event| {
        let transition = picker.borrow_mut().handle(&PickerEvent::DocumentClicked);
        els.render_transition(&transition);
    })?;

    Ok(())
}

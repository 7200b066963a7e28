#![forbid(unsafe_code)]

//! Nav scroll state, footer year and scroll reveal.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Object};
use swipio_core::config::{FooterConfig, NavConfig, RevealConfig};
use swipio_core::error::Result;
use swipio_core::footer::footer_text_now;
use swipio_core::host::YearSource;
use swipio_core::nav::NavScroll;
use swipio_core::reveal::{RevealAction, RevealId, RevealTracker};
use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom::{by_id, dom_error, query_document, set_class};

// ---------------------------------------------------------------------------
// Nav
// ---------------------------------------------------------------------------

/// Passive `scroll` listener toggling the scrolled class on the nav bar.
pub(crate) fn init_nav_scroll(window: &Window, doc: &Document, config: &NavConfig) -> Result<()> {
    let Some(nav) = by_id(doc, &config.nav_id) else {
        return Ok(());
    };
    let mut state = NavScroll::new(config.threshold_px);
    let class = config.scrolled_class.clone();
    let win = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let offset = win.scroll_y().unwrap_or(0.0);
        if let Some(scrolled) = state.on_scroll(offset) {
            trace!(offset, scrolled, "nav state");
            set_class(&nav, &class, scrolled);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| dom_error(&err))?;
    on_scroll.forget();
    Ok(())
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub(crate) fn init_footer_year(doc: &Document, config: &FooterConfig, clock: &impl YearSource) {
    let Some(el) = by_id(doc, &config.element_id) else {
        return;
    };
    let text = footer_text_now(&config.owner, config.epoch_year, clock);
    el.set_text_content(Some(&text));
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

/// Elements under observation, paired with their reveal state.
struct RevealRegistry {
    tracker: RevealTracker,
    elements: Vec<(RevealId, Element)>,
}

impl RevealRegistry {
    fn id_of(&self, target: &Element) -> Option<RevealId> {
        self.elements
            .iter()
            .find(|(_, el)| Object::is(el, target))
            .map(|(id, _)| *id)
    }
}

/// Observe every reveal-tagged element once; reveal and unobserve on the
/// first qualifying intersection.
pub(crate) fn init_scroll_reveal(doc: &Document, config: &RevealConfig) -> Result<()> {
    let targets = query_document(doc, &config.selector);
    if targets.is_empty() {
        debug!(selector = %config.selector, "no reveal targets");
        return Ok(());
    }

    let mut tracker = RevealTracker::new();
    let elements = targets
        .into_iter()
        .map(|el| (tracker.register(), el))
        .collect();
    let registry = Rc::new(RefCell::new(RevealRegistry { tracker, elements }));

    let class = config.visible_class.clone();
    let shared = Rc::clone(&registry);
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut registry = shared.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = registry.id_of(&target) else {
                    continue;
                };
                if registry.tracker.on_intersection(id, entry.is_intersecting())
                    == RevealAction::Reveal
                {
                    set_class(&target, &class, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = config.options();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
            .map_err(|err| dom_error(&err))?;
    on_intersect.forget();

    for (_, el) in &registry.borrow().elements {
        observer.observe(el);
    }
    debug!(count = registry.borrow().tracker.len(), "observing reveal targets");
    Ok(())
}

#![forbid(unsafe_code)]

//! Small `web-sys` helpers shared by the page features.
//!
//! Lookups return `Option`/`Vec` so each feature receives its elements
//! already resolved and simply skips what is missing.

use swipio_core::SiteError;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, NodeList, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// `getElementById`, logging when the element is absent.
pub(crate) fn by_id(doc: &Document, id: &str) -> Option<Element> {
    let el = doc.get_element_by_id(id);
    if el.is_none() {
        debug!(id, "element not found; skipping");
    }
    el
}

/// `querySelectorAll` under `root`. Invalid selectors yield nothing.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    collect_elements(root.query_selector_all(selector), selector)
}

/// Document-wide `querySelectorAll`.
pub(crate) fn query_document(doc: &Document, selector: &str) -> Vec<Element> {
    collect_elements(doc.query_selector_all(selector), selector)
}

fn collect_elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match result {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            debug!(selector, error = %js_message(&err), "selector rejected");
            Vec::new()
        }
    }
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        debug!(class, error = %js_message(&err), "classList.toggle failed");
    }
}

pub(crate) fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        debug!(name, error = %js_message(&err), "setAttribute failed");
    }
}

pub(crate) fn set_bool_attr(el: &Element, name: &str, value: bool) {
    set_attr(el, name, if value { "true" } else { "false" });
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn dom_error(value: &JsValue) -> SiteError {
    SiteError::dom(js_message(value))
}

pub(crate) fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

pub(crate) fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

#![forbid(unsafe_code)]

//! `wasm-bindgen` entry point.

use swipio_core::SiteConfig;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::dom::{document, install_panic_hook, window};
use crate::hosts::BrowserYear;
use crate::logging::{install, level_filter};
use crate::{page, picker};

/// Wire up the landing page.
///
/// `configJson` optionally overrides parts of the default configuration
/// (see `swipio_core::config`). A malformed or invalid override is the only
/// error surfaced to the caller; everything after that degrades silently,
/// feature by feature.
#[wasm_bindgen(js_name = initLandingPage)]
pub fn init_landing_page(config_json: Option<String>) -> Result<(), JsValue> {
    install_panic_hook();

    let config = match config_json.as_deref() {
        Some(json) => {
            SiteConfig::from_json_str(json).map_err(|err| JsValue::from_str(&err.to_string()))?
        }
        None => SiteConfig::default(),
    };
    if let Some(filter) = level_filter(config.log_level.as_deref()) {
        install(filter);
    }

    let (Some(window), Some(doc)) = (window(), document()) else {
        return Ok(());
    };

    if let Err(err) = page::init_nav_scroll(&window, &doc, &config.nav) {
        warn!(%err, "nav scroll disabled");
    }
    page::init_footer_year(&doc, &config.footer, &BrowserYear);
    if let Err(err) = page::init_scroll_reveal(&doc, &config.reveal) {
        warn!(%err, "scroll reveal disabled");
    }
    if let Err(err) = picker::init_language_picker(&window, &doc, &config.picker) {
        warn!(%err, "language picker partially wired");
    }

    info!("landing page ready");
    Ok(())
}

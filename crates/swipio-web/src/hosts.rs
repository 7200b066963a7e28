#![forbid(unsafe_code)]

//! Browser implementations of the `swipio_core::host` traits.

use swipio_core::error::Result;
use swipio_core::host::{
    LocaleSource, LocationProvider, PageNavigator, PreferenceStore, YearSource,
};
use swipio_core::SiteError;
use tracing::debug;
use web_sys::{Storage, Window};

use crate::dom::js_message;

/// `window.localStorage`. Private-mode browsers may refuse access; the store
/// then reads as empty and writes fail softly.
pub(crate) struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub(crate) fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                debug!(error = %js_message(&err), "localStorage unavailable");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| SiteError::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| SiteError::storage(js_message(&err)))
    }
}

/// `navigator.languages`, falling back to `navigator.language`.
pub(crate) struct BrowserLocales {
    window: Window,
}

impl BrowserLocales {
    pub(crate) fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl LocaleSource for BrowserLocales {
    fn languages(&self) -> Vec<String> {
        let navigator = self.window.navigator();
        let list: Vec<String> = navigator
            .languages()
            .iter()
            .map(|value| value.as_string().unwrap_or_default())
            .collect();
        if list.is_empty() {
            vec![navigator.language().unwrap_or_default()]
        } else {
            list
        }
    }
}

pub(crate) struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub(crate) fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl LocationProvider for BrowserLocation {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }
}

/// Assigns `location.href`.
pub(crate) struct BrowserNavigator {
    window: Window,
}

impl BrowserNavigator {
    pub(crate) fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl PageNavigator for BrowserNavigator {
    fn navigate(&mut self, href: &str) -> Result<()> {
        self.window
            .location()
            .set_href(href)
            .map_err(|err| SiteError::navigation(href, js_message(&err)))
    }
}

/// Local calendar year from `new Date()`.
pub(crate) struct BrowserYear;

impl YearSource for BrowserYear {
    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
}

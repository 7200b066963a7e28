#![forbid(unsafe_code)]

//! Host-facing seams for browser globals.
//!
//! The core never touches `localStorage`, `location` or `navigator`
//! directly. The web binding implements these traits over `web-sys`; the
//! in-memory versions below drive native tests and any non-browser host.

use std::collections::HashMap;

use crate::error::Result;

/// Persistent per-origin key/value storage (`localStorage`).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The browser's ordered list of preferred locales.
pub trait LocaleSource {
    fn languages(&self) -> Vec<String>;
}

/// Current document location.
pub trait LocationProvider {
    fn pathname(&self) -> String;
}

/// Full-page navigation.
pub trait PageNavigator {
    fn navigate(&mut self, href: &str) -> Result<()>;
}

/// Calendar year according to the local clock.
pub trait YearSource {
    fn current_year(&self) -> i32;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

impl<T: PageNavigator + ?Sized> PageNavigator for &mut T {
    fn navigate(&mut self, href: &str) -> Result<()> {
        (**self).navigate(href)
    }
}

// ---------------------------------------------------------------------------
// In-memory hosts
// ---------------------------------------------------------------------------

/// `HashMap`-backed preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Fixed locale list.
#[derive(Debug, Clone, Default)]
pub struct StaticLocales(pub Vec<String>);

impl StaticLocales {
    #[must_use]
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locales.into_iter().map(Into::into).collect())
    }
}

impl LocaleSource for StaticLocales {
    fn languages(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Fixed pathname.
#[derive(Debug, Clone)]
pub struct StaticLocation(pub String);

impl LocationProvider for StaticLocation {
    fn pathname(&self) -> String {
        self.0.clone()
    }
}

/// Navigator that records every requested URL instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl PageNavigator for RecordingNavigator {
    fn navigate(&mut self, href: &str) -> Result<()> {
        self.visited.push(href.to_owned());
        Ok(())
    }
}

/// Clock frozen on one year.
#[derive(Debug, Clone, Copy)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

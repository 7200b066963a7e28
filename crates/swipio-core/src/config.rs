#![forbid(unsafe_code)]

//! Page configuration as data.
//!
//! Every selector, id, threshold and key the enhancement layer relies on
//! lives in [`SiteConfig`]. `SiteConfig::default()` matches the markup the
//! landing page ships with; a page can override any subset by passing a JSON
//! object to the web entry point:
//!
//! ```json
//! { "nav": { "threshold_px": 24 }, "log_level": "debug" }
//! ```
//!
//! Sections and fields left out keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::reveal::RevealOptions;

// ---------------------------------------------------------------------------
// Top-level SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub footer: FooterConfig,
    pub reveal: RevealConfig,
    pub picker: PickerConfig,
    /// Console log level (`error` … `trace`, or `off`). No logging when unset.
    pub log_level: Option<String>,
}

impl SiteConfig {
    /// Parse and validate a JSON override.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(SiteError::InvalidConfig(errors))
        }
    }

    /// Validate all parameters; an empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.nav.threshold_px.is_finite() || self.nav.threshold_px < 0.0 {
            errors.push(format!(
                "nav.threshold_px must be a non-negative number, got {}",
                self.nav.threshold_px
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            errors.push(format!(
                "reveal.threshold must be in [0, 1], got {}",
                self.reveal.threshold
            ));
        }
        if self.reveal.selector.trim().is_empty() {
            errors.push("reveal.selector must not be empty".to_owned());
        }
        if self.picker.storage_key.is_empty() {
            errors.push("picker.storage_key must not be empty".to_owned());
        }
        let base = &self.picker.pages_base;
        let bad_segment = base
            .strip_suffix('/')
            .is_some_and(|dirs| dirs.split('/').any(|seg| matches!(seg, "" | "." | "..")));
        if base.is_empty() || base.starts_with('/') || !base.ends_with('/') || bad_segment {
            errors.push(format!(
                "picker.pages_base must be a relative folder ending in '/', got {:?}",
                self.picker.pages_base
            ));
        }
        if self.footer.owner.trim().is_empty() {
            errors.push("footer.owner must not be empty".to_owned());
        }
        if let Some(level) = &self.log_level {
            const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
            if !LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
                errors.push(format!("log_level {level:?} is not a known level"));
            }
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) past which the nav is marked scrolled.
    pub threshold_px: f64,
    pub nav_id: String,
    pub scrolled_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            threshold_px: 10.0,
            nav_id: "nav".to_owned(),
            scrolled_class: "scrolled".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub owner: String,
    /// First year of the copyright range.
    pub epoch_year: i32,
    pub element_id: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            owner: "Znanixx".to_owned(),
            epoch_year: 2026,
            element_id: "footer-year".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub selector: String,
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let options = RevealOptions::default();
        Self {
            threshold: options.threshold,
            root_margin: options.root_margin,
            selector: ".fade-in".to_owned(),
            visible_class: "visible".to_owned(),
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// `localStorage` key of the language preference.
    pub storage_key: String,
    /// Folder holding the non-English pages, relative to the site root.
    pub pages_base: String,
    pub dropdown_id: String,
    pub trigger_id: String,
    pub trigger_flag_id: String,
    pub trigger_label_id: String,
    pub panel_id: String,
    /// Class toggled on the dropdown while it is open.
    pub open_class: String,
    /// Option elements inside the panel; each carries `data-lang`.
    pub option_selector: String,
    /// Footer anchors carrying `data-doc`.
    pub doc_link_selector: String,
    /// Badge images; the marketplace is told apart by `src`.
    pub badge_selector: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            storage_key: "swipio-lang".to_owned(),
            pages_base: "pages/".to_owned(),
            dropdown_id: "lang-dropdown".to_owned(),
            trigger_id: "lang-trigger".to_owned(),
            trigger_flag_id: "lang-trigger-flag".to_owned(),
            trigger_label_id: "lang-trigger-label".to_owned(),
            panel_id: "lang-panel".to_owned(),
            open_class: "open".to_owned(),
            option_selector: ".lang-option".to_owned(),
            doc_link_selector: ".footer-links a[data-doc]".to_owned(),
            badge_selector: ".store-btn img".to_owned(),
        }
    }
}

impl PickerConfig {
    /// `<badge_selector>[src*="<needle>"]`
    #[must_use]
    pub fn badge_query(&self, needle: &str) -> String {
        format!("{}[src*=\"{needle}\"]", self.badge_selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_valid() {
        assert!(SiteConfig::default().validate().is_empty());
    }

    #[test]
    fn defaults_match_page_markup() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.nav.threshold_px, 10.0);
        assert_eq!(cfg.footer.epoch_year, 2026);
        assert_eq!(cfg.picker.storage_key, "swipio-lang");
        assert_eq!(cfg.picker.pages_base, "pages/");
        assert_eq!(cfg.reveal.options(), RevealOptions::default());
        assert_eq!(cfg.log_level, None);
    }

    #[test]
    fn empty_object_is_default() {
        let cfg = SiteConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let cfg =
            SiteConfig::from_json_str(r#"{"nav":{"threshold_px":24},"log_level":"debug"}"#)
                .unwrap();
        assert_eq!(cfg.nav.threshold_px, 24.0);
        assert_eq!(cfg.nav.nav_id, "nav");
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        assert_eq!(cfg.picker, PickerConfig::default());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SiteConfig::from_json_str("{nav:").unwrap_err();
        assert!(matches!(err, SiteError::Json(_)));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut cfg = SiteConfig::default();
        cfg.nav.threshold_px = -1.0;
        cfg.reveal.threshold = 1.5;
        cfg.picker.storage_key.clear();
        cfg.picker.pages_base = "/pages".to_owned();
        cfg.log_level = Some("loud".to_owned());
        assert_eq!(cfg.validate().len(), 5);
    }

    #[test]
    fn invalid_json_config_is_rejected() {
        let err = SiteConfig::from_json_str(r#"{"reveal":{"threshold":2.0}}"#).unwrap_err();
        match err {
            SiteError::InvalidConfig(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn nested_pages_base_is_accepted() {
        let cfg = SiteConfig::from_json_str(r#"{"picker":{"pages_base":"intl/pages/"}}"#)
            .unwrap();
        assert_eq!(cfg.picker.pages_base, "intl/pages/");
    }

    #[test]
    fn pages_base_needs_plain_folder_names() {
        for base in ["pages//", "../pages/", "./", "pages/./de/", "/", "pages"] {
            let mut cfg = SiteConfig::default();
            cfg.picker.pages_base = base.to_owned();
            assert_eq!(cfg.validate().len(), 1, "{base:?}");
        }
    }

    #[test]
    fn badge_query_targets_src_substring() {
        let cfg = PickerConfig::default();
        assert_eq!(
            cfg.badge_query("app-store"),
            r#".store-btn img[src*="app-store"]"#
        );
    }
}

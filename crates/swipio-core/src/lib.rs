#![forbid(unsafe_code)]

//! Deterministic core of the Swipio landing page.
//!
//! # Role
//! `swipio-core` holds every decision the landing page makes: which language
//! to show, which URLs to write into links and images, when the nav bar
//! counts as scrolled, when a section is revealed, and how the language
//! dropdown reacts to clicks. It has no JS types; browser globals reach it
//! through the traits in [`host`], so all of it runs in native tests.
//!
//! # How it fits
//! `swipio-web` binds these pieces to the live DOM with `wasm-bindgen`. The
//! four page features are independent of each other:
//!
//! - [`nav`]: nav bar "scrolled" state.
//! - [`footer`]: copyright year range.
//! - [`reveal`]: one-shot scroll reveal.
//! - [`picker`]: language picker, built on [`lang`], [`path`] and [`resolve`].

pub mod config;
pub mod error;
pub mod footer;
pub mod host;
pub mod lang;
pub mod nav;
pub mod path;
pub mod picker;
pub mod resolve;
pub mod reveal;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use lang::{Lang, LegalDoc, Marketplace, effective_lang};
pub use path::PathContext;
pub use picker::{LanguagePicker, PickerEffect, PickerEvent, PickerState, PickerView};
pub use resolve::{LangSource, Resolution, resolve_language};

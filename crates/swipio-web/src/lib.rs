#![forbid(unsafe_code)]

//! Browser binding for the Swipio landing page.
//!
//! Exposes a single `wasm-bindgen` export, `initLandingPage`, that attaches
//! the four page features to the live DOM:
//!
//! - nav bar "scrolled" class on scroll,
//! - footer copyright year range,
//! - one-shot reveal of `.fade-in` sections,
//! - the language picker.
//!
//! All decisions are made by `swipio-core`; this crate only looks up
//! elements, registers listeners and writes what the core tells it to.
//! Non-wasm builds compile only the target-independent helpers.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod hosts;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod picker;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::init_landing_page;

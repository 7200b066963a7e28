#![forbid(unsafe_code)]

//! Navigation bar "scrolled" state.

/// `true` once the page is scrolled strictly past `threshold` pixels.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks the last state written to the nav element so repeated scroll
/// events only touch the DOM when the state flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavScroll {
    threshold: f64,
    applied: Option<bool>,
}

impl NavScroll {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            applied: None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last state handed out by [`Self::on_scroll`].
    #[must_use]
    pub const fn applied(&self) -> Option<bool> {
        self.applied
    }

    /// Feed a scroll offset; returns the state to write, if it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        let scrolled = is_scrolled(offset, self.threshold);
        if self.applied == Some(scrolled) {
            return None;
        }
        self.applied = Some(scrolled);
        Some(scrolled)
    }
}

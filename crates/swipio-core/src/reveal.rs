#![forbid(unsafe_code)]

//! One-shot scroll reveal.
//!
//! Each tracked element starts [`RevealState::Unseen`] and moves to
//! [`RevealState::Visible`] on its first qualifying intersection. There is
//! no way back: later events for a visible element are ignored, and the
//! host is told to stop observing it so watches do not pile up.

use tracing::trace;

/// Observer options handed to `IntersectionObserver`.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible (0.0–1.0).
    pub threshold: f64,
    /// CSS margin applied to the viewport; a negative bottom margin delays
    /// the trigger until the element is comfortably on screen.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -40px 0px".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Visible,
}

/// What the host should do with an intersection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and unobserve the element.
    Reveal,
    Ignore,
}

/// Handle to an element registered with a [`RevealTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

impl RevealId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new element.
    pub fn register(&mut self) -> RevealId {
        self.states.push(RevealState::Unseen);
        RevealId(self.states.len() - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.states.get(id.0).copied()
    }

    /// Elements still waiting for their first intersection.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Unseen)
            .count()
    }

    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool) -> RevealAction {
        let Some(state) = self.states.get_mut(id.0) else {
            return RevealAction::Ignore;
        };
        if !is_intersecting || *state == RevealState::Visible {
            return RevealAction::Ignore;
        }
        *state = RevealState::Visible;
        trace!(id = id.0, "revealed");
        RevealAction::Reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = RevealOptions::default();
        assert!((opts.threshold - 0.15).abs() < f64::EPSILON);
        assert_eq!(opts.root_margin, "0px 0px -40px 0px");
    }

    #[test]
    fn reveals_exactly_once() {
        let mut tracker = RevealTracker::new();
        let id = tracker.register();
        assert_eq!(tracker.on_intersection(id, false), RevealAction::Ignore);
        assert_eq!(tracker.state(id), Some(RevealState::Unseen));
        assert_eq!(tracker.on_intersection(id, true), RevealAction::Reveal);
        assert_eq!(tracker.on_intersection(id, true), RevealAction::Ignore);
        assert_eq!(tracker.on_intersection(id, false), RevealAction::Ignore);
        assert_eq!(tracker.state(id), Some(RevealState::Visible));
    }

    #[test]
    fn elements_are_independent() {
        let mut tracker = RevealTracker::new();
        let a = tracker.register();
        let b = tracker.register();
        assert_eq!(tracker.pending(), 2);
        assert_eq!(tracker.on_intersection(b, true), RevealAction::Reveal);
        assert_eq!(tracker.state(a), Some(RevealState::Unseen));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.on_intersection(RevealId(3), true), RevealAction::Ignore);
        assert!(tracker.is_empty());
    }
}

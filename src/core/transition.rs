//! Transition rules.

use serde::{Deserialize, Serialize};

/// A rule mapping `(from, signal)` to a target state.
///
/// When several transitions share the same `from` and `signal`, the engine
/// takes the first one in table order.
///
/// # Example
///
/// ```rust
/// use stop_fsm::core::Transition;
///
/// let t = Transition::new("locked", "coin", "unlocked");
/// assert!(t.matches(&"locked", &"coin"));
/// assert!(!t.matches(&"unlocked", &"coin"));
/// assert!(!t.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S, G> {
    /// The state being transitioned from
    pub from: S,
    /// The signal triggering the transition
    pub signal: G,
    /// The state being transitioned to
    pub to: S,
}

impl<S: PartialEq, G: PartialEq> Transition<S, G> {
    pub fn new(from: S, signal: G, to: S) -> Self {
        Self { from, signal, to }
    }

    /// Check if this transition applies to `current` receiving `signal` (pure)
    pub fn matches(&self, current: &S, signal: &G) -> bool {
        self.from == *current && self.signal == *signal
    }

    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

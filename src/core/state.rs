//! The `State` trait and its capability flags.
//!
//! A state is an opaque value compared by `PartialEq`. What a state can *do*
//! is described by its [`Capabilities`], which the engine reads once when the
//! machine is constructed and caches next to the state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Optional behaviors a state may carry.
///
/// Any subset may be combined. The engine only calls an action hook when the
/// matching flag is set, so a state that leaves a flag unset never observes
/// the corresponding call.
///
/// # Example
///
/// ```rust
/// use stop_fsm::core::Capabilities;
///
/// let caps = Capabilities::NONE.with_entry_action().with_default();
/// assert!(caps.is_default());
/// assert!(caps.has_entry_action());
/// assert!(!caps.has_exit_action());
/// assert!(!caps.has_output_signal());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    default: bool,
    entry_action: bool,
    exit_action: bool,
    output_signal: bool,
}

impl Capabilities {
    /// A plain state: no actions, not a default, no output signal.
    pub const NONE: Self = Self {
        default: false,
        entry_action: false,
        exit_action: false,
        output_signal: false,
    };

    /// Entry and exit actions, the most common combination.
    pub const ACTIONS: Self = Self::NONE.with_entry_action().with_exit_action();

    /// Mark the state as the fallback handler for unmatched signals.
    pub const fn with_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// The state runs an action after it becomes current.
    pub const fn with_entry_action(mut self) -> Self {
        self.entry_action = true;
        self
    }

    /// The state runs an action right before it stops being current.
    pub const fn with_exit_action(mut self) -> Self {
        self.exit_action = true;
        self
    }

    /// The state produces a signal that is re-submitted once it becomes current.
    pub const fn with_output_signal(mut self) -> Self {
        self.output_signal = true;
        self
    }

    pub const fn is_default(&self) -> bool {
        self.default
    }

    pub const fn has_entry_action(&self) -> bool {
        self.entry_action
    }

    pub const fn has_exit_action(&self) -> bool {
        self.exit_action
    }

    pub const fn has_output_signal(&self) -> bool {
        self.output_signal
    }
}

/// Trait for state machine states.
///
/// `G` is the signal type of the machine the state belongs to; it only
/// matters for states that emit output signals.
///
/// # Required Traits
///
/// - `PartialEq`: states are identified by equality, both when looking up
///   transitions and when checking membership. Compare identity fields
///   only; data mutated by actions must not take part, or the machine's
///   copy stops matching the caller's copy after the first action
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use stop_fsm::core::{Capabilities, State};
///
/// #[derive(Debug)]
/// struct Locked {
///     id: &'static str,
///     closings: u32,
/// }
///
/// impl PartialEq for Locked {
///     fn eq(&self, other: &Self) -> bool {
///         self.id == other.id
///     }
/// }
///
/// impl State<&'static str> for Locked {
///     fn name(&self) -> &str {
///         self.id
///     }
///
///     fn capabilities(&self) -> Capabilities {
///         Capabilities::NONE.with_entry_action()
///     }
///
///     fn after_entry_action(&mut self) {
///         self.closings += 1;
///     }
/// }
///
/// let mut locked = Locked { id: "locked", closings: 0 };
/// locked.after_entry_action();
/// assert_eq!(locked.closings, 1);
/// assert_eq!(locked, Locked { id: "locked", closings: 0 });
/// assert!(locked.capabilities().has_entry_action());
/// ```
pub trait State<G>: PartialEq + Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Capabilities of this state.
    ///
    /// Read once per state when a machine is built. Default implementation
    /// returns [`Capabilities::NONE`].
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    /// Invoked after this state becomes current.
    fn after_entry_action(&mut self) {}

    /// Invoked immediately before this state stops being current.
    fn before_exit_action(&mut self) {}

    /// Produce the next output signal.
    ///
    /// Called once per cascade step while the state is current. Stateful
    /// emitters may return a different signal on each call. `None` ends the
    /// cascade.
    fn output_signal(&mut self) -> Option<G> {
        None
    }
}

impl<G> State<G> for &str {
    fn name(&self) -> &str {
        self
    }
}

impl<G> State<G> for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

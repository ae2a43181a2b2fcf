//! Core data model of the state machine.
//!
//! This module contains the values the engine works with:
//! - States via the `State` trait and their cached `Capabilities`
//! - Signals via the blanket `Signal` trait
//! - `Transition` rules mapping (state, signal) to a target state
//!
//! Nothing in this module has side effects; actions are only invoked by the
//! engine.

mod signal;
mod state;
mod transition;

pub use signal::Signal;
pub use state::{Capabilities, State};
pub use transition::Transition;

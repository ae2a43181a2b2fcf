//! The signal-processing engine.
//!
//! `FiniteStateMachine` owns the transition table and the current state and
//! implements the processing algorithm:
//!
//! 1. find the first transition matching the current state and signal
//! 2. run exit/entry actions when the state changes, or notify the default
//!    state when nothing matched
//! 3. while the current state emits output signals, re-submit them, bounded
//!    by [`MachineConfig::max_cascade_steps`]
//!
//! Processing is synchronous and single-threaded; callers sharing a machine
//! across threads must serialize access themselves.

mod config;
mod error;
mod machine;

pub use config::{MachineConfig, DEFAULT_MAX_CASCADE_STEPS};
pub use error::ConfigurationError;
pub use machine::FiniteStateMachine;

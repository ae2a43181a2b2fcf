//! StOP FSM: a finite state machine engine
//!
//! A machine is a set of states, a set of signals and an ordered transition
//! table. Feeding it a signal moves it along the first matching transition,
//! running the states' entry and exit actions on the way. Signals that match
//! nothing are either ignored or handed to a single *default state*, and
//! states may emit *output signals* that the machine feeds back to itself.
//!
//! # Core Concepts
//!
//! - **State**: any value implementing the [`State`] trait, with optional
//!   [`Capabilities`] (entry action, exit action, default, output signal)
//! - **Signal**: any `Clone + PartialEq + Debug` value
//! - **Transition**: a `(from, signal, to)` rule; the first match wins
//! - **Transition matrix**: the same machine written as a 2-D table
//!
//! # Example
//!
//! ```rust
//! use stop_fsm::{transition_matrix, FiniteStateMachine, MatrixStateMachine, Transition};
//!
//! let mut turnstile = FiniteStateMachine::new(
//!     vec!["locked", "unlocked"],
//!     vec!["coin", "push"],
//!     vec![
//!         Transition::new("locked", "coin", "unlocked"),
//!         Transition::new("unlocked", "push", "locked"),
//!     ],
//!     "locked",
//! )
//! .unwrap();
//!
//! assert_eq!(turnstile.send_signal("coin").unwrap(), &"unlocked");
//! assert_eq!(turnstile.send_signal("coin").unwrap(), &"unlocked");
//! assert_eq!(turnstile.send_signal("push").unwrap(), &"locked");
//!
//! let matrix = transition_matrix! {
//!     [ _      , "locked"   , "unlocked" ]
//!     [ "coin" , "unlocked" , _          ]
//!     [ "push" , _          , "locked"   ]
//! }
//! .unwrap();
//!
//! let mut from_table = MatrixStateMachine::new(matrix, None).unwrap();
//! assert_eq!(from_table.send_signal("coin").unwrap(), &"unlocked");
//! ```

pub mod audit;
pub mod builder;
pub mod core;
pub mod engine;
pub mod matrix;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use core::{Capabilities, Signal, State, Transition};
pub use engine::{ConfigurationError, FiniteStateMachine, MachineConfig};
pub use matrix::{MatrixCell, MatrixStateMachine, TransitionMatrix};

//! Builder API for ergonomic state machine construction.
//!
//! [`MachineBuilder`] assembles a [`FiniteStateMachine`](crate::FiniteStateMachine)
//! piece by piece, and the [`transition_matrix!`](crate::transition_matrix)
//! macro writes a [`TransitionMatrix`](crate::TransitionMatrix) as a table.

mod machine;
mod macros;

pub use machine::MachineBuilder;

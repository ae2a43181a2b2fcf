//! Configuration errors.

use thiserror::Error;

/// Errors raised while configuring a state machine.
///
/// Every variant describes a configuration the caller has to fix before
/// reconstructing; none of them leaves a partially built machine behind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("found {count} states with default capability; only one is allowed")]
    MultipleDefaultStates { count: usize },

    #[error("transition matrix has no rows")]
    EmptyMatrix,

    #[error("transition matrix has no states to start from")]
    NoStates,

    #[error("start state '{start}' not found in matrix states: [{states}]")]
    StartStateNotInMatrix { start: String, states: String },

    #[error("start state '{start}' is not one of the machine's states")]
    UnknownStartState { start: String },

    #[error("transition {index} refers to unknown state '{state}'")]
    UnknownTransitionState { index: usize, state: String },

    #[error("matrix cell at row {row}, column {column} must be {expected}")]
    MisplacedCell {
        row: usize,
        column: usize,
        expected: &'static str,
    },

    #[error("start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("output signal cascade exceeded {limit} steps at state '{state}'")]
    CascadeLimitExceeded { limit: usize, state: String },

    #[error("invalid machine configuration: {0}")]
    InvalidConfig(String),
}

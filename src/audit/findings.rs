//! Configuration defects reported by an audit.

use thiserror::Error;

/// A defect found in a machine's configuration.
///
/// Findings never prevent construction; they describe tables that are legal
/// but almost certainly not what the author meant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Finding {
    #[error("transition #{index} ({from} on {signal}) is shadowed by transition #{shadowed_by}")]
    ShadowedTransition {
        index: usize,
        shadowed_by: usize,
        from: String,
        signal: String,
    },

    #[error("transition #{index} uses signal {signal} which is not declared")]
    UndeclaredSignal { index: usize, signal: String },

    #[error("state '{state}' is unreachable from the start state")]
    UnreachableState { state: String },

    #[error("state '{state}' emits output signals but has no outgoing transitions")]
    DeadEndEmitter { state: String },

    #[error("state '{state}' emits output signals and has a self-transition")]
    SelfLoopEmitter { state: String },

    #[error("Custom check failed: {message}")]
    Custom { message: String },
}

impl Finding {
    /// Name of the state the finding is about, if it concerns one state.
    pub fn state(&self) -> Option<&str> {
        match self {
            Self::UnreachableState { state }
            | Self::DeadEndEmitter { state }
            | Self::SelfLoopEmitter { state } => Some(state),
            Self::ShadowedTransition { from, .. } => Some(from),
            Self::UndeclaredSignal { .. } | Self::Custom { .. } => None,
        }
    }
}

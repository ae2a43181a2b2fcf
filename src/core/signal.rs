//! Signals submitted to a state machine.

use std::fmt::Debug;

/// Marker trait for signal values.
///
/// A signal is an opaque event compared by equality. Any `Clone + PartialEq + Debug`
/// type qualifies: string literals, enums, or richer event objects.
pub trait Signal: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Signal for T {}

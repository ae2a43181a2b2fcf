//! Transition matrices: state machines written as 2-D tables.
//!
//! Row 0 is the header: an empty leading cell followed by one state per
//! column. Every following row starts with a signal and holds, under each
//! state's column, the target state for that (state, signal) pair or an
//! empty cell when there is no transition.
//!
//! ```text
//!          | locked   | unlocked
//! coin     | unlocked |
//! push     |          | locked
//! ```
//!
//! The [`transition_matrix!`](crate::transition_matrix) macro writes such a
//! table directly in source, with `_` for empty cells.

mod machine;
mod render;

pub use machine::MatrixStateMachine;

use crate::core::Transition;
use crate::engine::ConfigurationError;
use tracing::warn;

/// One cell of a raw 2-D transition table.
#[derive(Clone, Debug, PartialEq)]
pub enum MatrixCell<S, G> {
    /// No value; no transition for this (state, signal) pair
    Empty,
    /// A state: header column or transition target
    State(S),
    /// A signal: first column of a signal row
    Signal(G),
}

impl<S, G> MatrixCell<S, G> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The compiled form of a 2-D table: states, signals and transitions.
///
/// Column order of the header is preserved in [`states`](Self::states) and
/// row order in [`signals`](Self::signals); transitions are listed row by
/// row, left to right. Built once and immutable afterwards.
///
/// # Example
///
/// ```rust
/// use stop_fsm::matrix::{MatrixCell::{Empty, Signal, State}, TransitionMatrix};
///
/// let matrix = TransitionMatrix::from_rows(vec![
///     vec![Empty, State("locked"), State("unlocked")],
///     vec![Signal("coin"), State("unlocked"), Empty],
///     vec![Signal("push"), Empty, State("locked")],
/// ])
/// .unwrap();
///
/// assert_eq!(matrix.states(), ["locked", "unlocked"]);
/// assert_eq!(matrix.signals(), ["coin", "push"]);
/// assert_eq!(matrix.transitions().len(), 2);
/// assert_eq!(matrix.target(&"locked", &"coin"), Some(&"unlocked"));
/// assert_eq!(matrix.target(&"locked", &"push"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionMatrix<S, G> {
    states: Vec<S>,
    signals: Vec<G>,
    transitions: Vec<Transition<S, G>>,
}

impl<S: Clone + PartialEq, G: Clone + PartialEq> TransitionMatrix<S, G> {
    /// Compile a table given as rows of cells.
    ///
    /// - zero rows is an error
    /// - the leading header cell is ignored; empty header cells leave their
    ///   column without a state and every cell below them is ignored
    /// - columns never shift: a cell maps to the state in its own header
    ///   column, even when earlier header cells are empty
    /// - a signal row whose first cell is empty is skipped entirely
    /// - cells beyond the last header column are ignored
    /// - a signal in a state position or a state in the signal column is a
    ///   [`ConfigurationError::MisplacedCell`]
    pub fn from_rows(rows: Vec<Vec<MatrixCell<S, G>>>) -> Result<Self, ConfigurationError> {
        let mut rows = rows.into_iter();
        let header = rows.next().ok_or(ConfigurationError::EmptyMatrix)?;

        let columns = header
            .into_iter()
            .enumerate()
            .skip(1)
            .map(|(column, cell)| match cell {
                MatrixCell::State(state) => Ok(Some(state)),
                MatrixCell::Empty => Ok(None),
                MatrixCell::Signal(_) => Err(ConfigurationError::MisplacedCell {
                    row: 0,
                    column,
                    expected: "a state or empty",
                }),
            })
            .collect::<Result<Vec<Option<S>>, _>>()?;

        let mut matrix = Self {
            states: columns.iter().flatten().cloned().collect(),
            signals: Vec::new(),
            transitions: Vec::new(),
        };

        for (index, row) in rows.enumerate() {
            let row_number = index + 1;
            let mut cells = row.into_iter();

            let signal = match cells.next() {
                Some(MatrixCell::Signal(signal)) => signal,
                Some(MatrixCell::Empty) | None => {
                    warn!(row = row_number, "Matrix row without signal skipped");
                    continue;
                }
                Some(MatrixCell::State(_)) => {
                    return Err(ConfigurationError::MisplacedCell {
                        row: row_number,
                        column: 0,
                        expected: "a signal or empty",
                    })
                }
            };

            for (offset, cell) in cells.enumerate() {
                let column = offset + 1;
                let target = match cell {
                    MatrixCell::Empty => continue,
                    MatrixCell::State(target) => target,
                    MatrixCell::Signal(_) => {
                        return Err(ConfigurationError::MisplacedCell {
                            row: row_number,
                            column,
                            expected: "a state or empty",
                        })
                    }
                };
                if let Some(Some(from)) = columns.get(offset) {
                    matrix
                        .transitions
                        .push(Transition::new(from.clone(), signal.clone(), target));
                }
            }

            matrix.signals.push(signal);
        }

        Ok(matrix)
    }

    /// All states, in header column order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// All signals, in row order.
    pub fn signals(&self) -> &[G] {
        &self.signals
    }

    /// All transitions, row by row.
    pub fn transitions(&self) -> &[Transition<S, G>] {
        &self.transitions
    }

    /// Target of the first transition for `(from, signal)`, if any.
    pub fn target(&self, from: &S, signal: &G) -> Option<&S> {
        self.transitions
            .iter()
            .find(|t| t.matches(from, signal))
            .map(|t| &t.to)
    }

    pub fn into_parts(self) -> (Vec<S>, Vec<G>, Vec<Transition<S, G>>) {
        (self.states, self.signals, self.transitions)
    }
}

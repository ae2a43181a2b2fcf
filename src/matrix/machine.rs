//! State machine built from a transition matrix.

use crate::core::{Signal, State};
use crate::engine::{ConfigurationError, FiniteStateMachine, MachineConfig};
use crate::matrix::TransitionMatrix;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A [`FiniteStateMachine`] compiled from a [`TransitionMatrix`].
///
/// Dereferences to the underlying machine, so the whole engine surface
/// (`send_signal`, `current_state`, `valid_signals`, ...) is available
/// directly. The matrix itself is kept for diagnostics.
///
/// # Example
///
/// ```rust
/// use stop_fsm::{transition_matrix, MatrixStateMachine};
///
/// let matrix = transition_matrix! {
///     [ _      , "locked"   , "unlocked" ]
///     [ "coin" , "unlocked" , _          ]
///     [ "push" , _          , "locked"   ]
/// }
/// .unwrap();
///
/// let mut turnstile = MatrixStateMachine::new(matrix, None).unwrap();
/// assert_eq!(turnstile.current_state(), &"locked");
/// assert_eq!(turnstile.send_signal("coin").unwrap(), &"unlocked");
/// ```
#[derive(Debug)]
pub struct MatrixStateMachine<S, G> {
    matrix: TransitionMatrix<S, G>,
    machine: FiniteStateMachine<S, G>,
}

impl<S: State<G> + Clone, G: Signal> MatrixStateMachine<S, G> {
    /// Build a machine from `matrix`.
    ///
    /// An explicit `start` must be one of the matrix states; without one the
    /// first header state is used.
    pub fn new(matrix: TransitionMatrix<S, G>, start: Option<S>) -> Result<Self, ConfigurationError> {
        Self::with_config(matrix, start, MachineConfig::default())
    }

    pub fn with_config(
        matrix: TransitionMatrix<S, G>,
        start: Option<S>,
        config: MachineConfig,
    ) -> Result<Self, ConfigurationError> {
        let start = resolve_start(&matrix, start)?;
        let (states, signals, transitions) = matrix.clone().into_parts();
        let machine =
            FiniteStateMachine::with_config(states, signals, transitions, start, config)?;

        Ok(Self { matrix, machine })
    }

    /// The compiled matrix this machine was built from.
    pub fn matrix(&self) -> &TransitionMatrix<S, G> {
        &self.matrix
    }

    pub fn machine(&self) -> &FiniteStateMachine<S, G> {
        &self.machine
    }

    pub fn into_machine(self) -> FiniteStateMachine<S, G> {
        self.machine
    }
}

fn resolve_start<S: State<G> + Clone, G: Signal>(
    matrix: &TransitionMatrix<S, G>,
    start: Option<S>,
) -> Result<S, ConfigurationError> {
    let states = matrix.states();
    match start {
        Some(start) if states.contains(&start) => Ok(start),
        Some(start) => Err(ConfigurationError::StartStateNotInMatrix {
            start: start.name().to_string(),
            states: states
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
        None => states.first().cloned().ok_or(ConfigurationError::NoStates),
    }
}

impl<S, G> Deref for MatrixStateMachine<S, G> {
    type Target = FiniteStateMachine<S, G>;

    fn deref(&self) -> &Self::Target {
        &self.machine
    }
}

impl<S, G> DerefMut for MatrixStateMachine<S, G> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.machine
    }
}

impl<S, G> fmt::Display for MatrixStateMachine<S, G>
where
    S: State<G> + Clone,
    G: Signal + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Capabilities, Transition};
    use crate::matrix::MatrixCell::{Empty, Signal, State as Target};
    use crate::test_support::{journal, take, Probe};

    fn turnstile_matrix() -> TransitionMatrix<&'static str, &'static str> {
        TransitionMatrix::from_rows(vec![
            vec![Empty, Target("locked"), Target("unlocked")],
            vec![Signal("coin"), Target("unlocked"), Empty],
            vec![Signal("push"), Empty, Target("locked")],
        ])
        .unwrap()
    }

    #[test]
    fn implicit_start_is_first_state() {
        let machine = MatrixStateMachine::new(turnstile_matrix(), None).unwrap();
        assert_eq!(machine.current_state(), &"locked");
    }

    #[test]
    fn explicit_start_is_honoured() {
        let mut machine = MatrixStateMachine::new(turnstile_matrix(), Some("unlocked")).unwrap();

        assert_eq!(machine.current_state(), &"unlocked");
        assert_eq!(machine.send_signal("push").unwrap(), &"locked");
    }

    #[test]
    fn explicit_start_outside_matrix_is_rejected() {
        let result = MatrixStateMachine::new(turnstile_matrix(), Some("broken"));

        let err = result.unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::StartStateNotInMatrix {
                start: "broken".to_string(),
                states: "locked, unlocked".to_string(),
            }
        );
    }

    #[test]
    fn matrix_without_states_is_rejected() {
        let matrix: TransitionMatrix<&str, &str> =
            TransitionMatrix::from_rows(vec![vec![Empty]]).unwrap();

        let result = MatrixStateMachine::new(matrix, None);
        assert_eq!(result.unwrap_err(), ConfigurationError::NoStates);
    }

    #[test]
    fn matrix_is_kept_for_diagnostics() {
        let machine = MatrixStateMachine::new(turnstile_matrix(), None).unwrap();

        assert_eq!(machine.matrix(), &turnstile_matrix());
        assert_eq!(machine.to_string(), turnstile_matrix().to_string());
    }

    #[test]
    fn matrix_and_explicit_machines_agree() {
        let mut from_matrix = MatrixStateMachine::new(turnstile_matrix(), None).unwrap();
        let mut explicit = FiniteStateMachine::new(
            vec!["locked", "unlocked"],
            vec!["coin", "push"],
            vec![
                Transition::new("locked", "coin", "unlocked"),
                Transition::new("unlocked", "push", "locked"),
            ],
            "locked",
        )
        .unwrap();

        for signal in ["push", "coin", "coin", "push", "bogus", "coin"] {
            assert_eq!(
                from_matrix.send_signal(signal).unwrap(),
                explicit.send_signal(signal).unwrap()
            );
        }
    }

    #[test]
    fn matrix_machine_detects_multiple_defaults() {
        let log = journal();
        let a = Probe::new("a", &log).with_caps(Capabilities::NONE.with_default());
        let b = Probe::new("b", &log).with_caps(Capabilities::NONE.with_default());
        let matrix = TransitionMatrix::from_rows(vec![
            vec![Empty, Target(a.clone()), Target(b.clone())],
            vec![Signal("go"), Target(b), Target(a)],
        ])
        .unwrap();

        let result = MatrixStateMachine::new(matrix, None);
        assert!(matches!(
            result,
            Err(ConfigurationError::MultipleDefaultStates { count: 2 })
        ));
    }

    #[test]
    fn actions_run_on_machine_owned_states() {
        let log = journal();
        let locked = Probe::new("locked", &log);
        let unlocked = Probe::new("unlocked", &log);
        let matrix = TransitionMatrix::from_rows(vec![
            vec![Empty, Target(locked.clone()), Target(unlocked.clone())],
            vec![Signal("coin"), Target(unlocked.clone()), Empty],
            vec![Signal("push"), Empty, Target(locked)],
        ])
        .unwrap();

        let mut machine = MatrixStateMachine::new(matrix, None).unwrap();
        assert_eq!(take(&log), ["enter:locked"]);

        machine.send_signal("coin").unwrap();
        assert_eq!(take(&log), ["exit:locked", "enter:unlocked"]);
        assert_eq!(machine.current_state(), &unlocked);
    }

    #[test]
    fn into_machine_keeps_current_state() {
        let mut machine = MatrixStateMachine::new(turnstile_matrix(), None).unwrap();
        machine.send_signal("coin").unwrap();

        let engine = machine.into_machine();
        assert_eq!(engine.current_state(), &"unlocked");
    }
}

//! Builder for constructing state machines.

use crate::core::{Signal, State, Transition};
use crate::engine::{ConfigurationError, FiniteStateMachine, MachineConfig};

/// Builder for constructing a [`FiniteStateMachine`] with a fluent API.
///
/// States and signals are declared in the order they are added, and
/// transitions are matched in the order they are added. The start state is
/// required; everything else may be empty.
///
/// # Example
///
/// ```rust
/// use stop_fsm::MachineBuilder;
///
/// let mut door = MachineBuilder::new()
///     .states(["closed", "open"])
///     .signals(["open", "close"])
///     .transition("closed", "open", "open")
///     .transition("open", "close", "closed")
///     .start("closed")
///     .build()
///     .unwrap();
///
/// assert_eq!(door.send_signal("open").unwrap(), &"open");
/// ```
#[derive(Debug)]
pub struct MachineBuilder<S, G> {
    states: Vec<S>,
    signals: Vec<G>,
    transitions: Vec<Transition<S, G>>,
    start: Option<S>,
    config: MachineConfig,
}

impl<S: State<G>, G: Signal> MachineBuilder<S, G> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            signals: Vec::new(),
            transitions: Vec::new(),
            start: None,
            config: MachineConfig::default(),
        }
    }

    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn signal(mut self, signal: G) -> Self {
        self.signals.push(signal);
        self
    }

    pub fn signals(mut self, signals: impl IntoIterator<Item = G>) -> Self {
        self.signals.extend(signals);
        self
    }

    /// Add a transition from `from` to `to` on `signal`.
    pub fn transition(mut self, from: S, signal: G, to: S) -> Self {
        self.transitions.push(Transition::new(from, signal, to));
        self
    }

    /// Add multiple pre-built transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, G>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the state machine.
    ///
    /// Fails with [`ConfigurationError::MissingStartState`] when no start
    /// state was given, and otherwise with whatever
    /// [`FiniteStateMachine::with_config`] reports.
    pub fn build(self) -> Result<FiniteStateMachine<S, G>, ConfigurationError> {
        let start = self.start.ok_or(ConfigurationError::MissingStartState)?;

        FiniteStateMachine::with_config(
            self.states,
            self.signals,
            self.transitions,
            start,
            self.config,
        )
    }
}

impl<S: State<G>, G: Signal> Default for MachineBuilder<S, G> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Capabilities;
    use crate::test_support::{journal, take, Probe};

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Phase {
        Idle,
        Running,
        Done,
    }

    impl State<char> for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }
    }

    #[test]
    fn builder_requires_start_state() {
        let result = MachineBuilder::<Phase, char>::new()
            .states([Phase::Idle, Phase::Done])
            .build();

        assert!(matches!(result, Err(ConfigurationError::MissingStartState)));
    }

    #[test]
    fn builder_allows_machine_without_transitions() {
        let mut machine = MachineBuilder::<Phase, char>::default()
            .state(Phase::Idle)
            .start(Phase::Idle)
            .build()
            .unwrap();

        assert!(machine.transitions().is_empty());
        assert_eq!(machine.send_signal('x').unwrap(), &Phase::Idle);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = MachineBuilder::new()
            .state(Phase::Idle)
            .states([Phase::Running, Phase::Done])
            .signal('s')
            .signals(['f', 'r'])
            .transition(Phase::Idle, 's', Phase::Running)
            .transitions([
                Transition::new(Phase::Running, 'f', Phase::Done),
                Transition::new(Phase::Done, 'r', Phase::Idle),
            ])
            .start(Phase::Idle)
            .build()
            .unwrap();

        assert_eq!(machine.states(), [Phase::Idle, Phase::Running, Phase::Done]);
        assert_eq!(machine.signals(), ['s', 'f', 'r']);
        assert_eq!(machine.transitions().len(), 3);

        assert_eq!(machine.send_signal('s').unwrap(), &Phase::Running);
        assert_eq!(machine.send_signal('f').unwrap(), &Phase::Done);
        assert_eq!(machine.send_signal('r').unwrap(), &Phase::Idle);
    }

    #[test]
    fn builder_propagates_construction_errors() {
        let result = MachineBuilder::<Phase, char>::new()
            .state(Phase::Idle)
            .transition(Phase::Idle, 's', Phase::Running)
            .start(Phase::Idle)
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::UnknownTransitionState {
                index: 0,
                state: "Running".to_string(),
            }
        );
    }

    #[test]
    fn builder_passes_config_through() {
        let log = journal();
        let echo = Probe::new("echo", &log)
            .with_caps(Capabilities::NONE.with_output_signal())
            .emitting(&["again"]);

        let result = MachineBuilder::new()
            .state(echo.clone())
            .signal("again")
            .transition(echo.clone(), "again", echo.clone())
            .start(echo)
            .config(MachineConfig::default().with_max_cascade_steps(4))
            .build();

        assert!(matches!(
            result,
            Err(ConfigurationError::CascadeLimitExceeded { limit: 4, .. })
        ));
        assert!(take(&log).is_empty());
    }
}

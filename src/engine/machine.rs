//! Finite state machine that processes signals.

use crate::core::{Capabilities, Signal, State, Transition};
use crate::engine::config::MachineConfig;
use crate::engine::error::ConfigurationError;
use tracing::{debug, info, trace, warn};

/// Finite state machine owning its states, signals and transition table.
///
/// States live in an arena owned by the machine; transitions are resolved to
/// arena slots once, at construction. The current state is the only piece of
/// mutable machine data and it only changes inside [`send_signal`].
///
/// [`send_signal`]: FiniteStateMachine::send_signal
#[derive(Debug)]
pub struct FiniteStateMachine<S, G> {
    states: Vec<S>,
    capabilities: Vec<Capabilities>,
    signals: Vec<G>,
    transitions: Vec<Transition<S, G>>,
    edges: Vec<(usize, usize)>,
    start: usize,
    current: usize,
    default_state: Option<usize>,
    config: MachineConfig,
}

impl<S: State<G>, G: Signal> FiniteStateMachine<S, G> {
    /// Create a machine with the default [`MachineConfig`].
    ///
    /// Fails when more than one state is default-capable, when `start` is not
    /// one of `states`, or when a transition refers to a state outside
    /// `states`. The entry action of `start` runs before this returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stop_fsm::core::Transition;
    /// use stop_fsm::FiniteStateMachine;
    ///
    /// let mut turnstile = FiniteStateMachine::new(
    ///     vec!["locked", "unlocked"],
    ///     vec!["coin", "push"],
    ///     vec![
    ///         Transition::new("locked", "coin", "unlocked"),
    ///         Transition::new("unlocked", "push", "locked"),
    ///     ],
    ///     "locked",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(turnstile.send_signal("coin").unwrap(), &"unlocked");
    /// assert_eq!(turnstile.send_signal("push").unwrap(), &"locked");
    /// assert_eq!(turnstile.send_signal("bogus").unwrap(), &"locked");
    /// ```
    pub fn new(
        states: Vec<S>,
        signals: Vec<G>,
        transitions: Vec<Transition<S, G>>,
        start: S,
    ) -> Result<Self, ConfigurationError> {
        Self::with_config(states, signals, transitions, start, MachineConfig::default())
    }

    /// Create a machine with an explicit configuration.
    pub fn with_config(
        states: Vec<S>,
        signals: Vec<G>,
        transitions: Vec<Transition<S, G>>,
        start: S,
        config: MachineConfig,
    ) -> Result<Self, ConfigurationError> {
        let capabilities: Vec<Capabilities> = states.iter().map(|s| s.capabilities()).collect();

        let defaults: Vec<usize> = capabilities
            .iter()
            .enumerate()
            .filter(|(_, caps)| caps.is_default())
            .map(|(index, _)| index)
            .collect();
        if defaults.len() > 1 {
            return Err(ConfigurationError::MultipleDefaultStates {
                count: defaults.len(),
            });
        }

        let start = slot_of(&states, &start).ok_or_else(|| ConfigurationError::UnknownStartState {
            start: start.name().to_string(),
        })?;

        let edges = transitions
            .iter()
            .enumerate()
            .map(|(index, transition)| -> Result<(usize, usize), ConfigurationError> {
                let resolve = |state: &S| {
                    slot_of(&states, state).ok_or_else(|| {
                        ConfigurationError::UnknownTransitionState {
                            index,
                            state: state.name().to_string(),
                        }
                    })
                };
                Ok((resolve(&transition.from)?, resolve(&transition.to)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut machine = Self {
            states,
            capabilities,
            signals,
            transitions,
            edges,
            start,
            current: start,
            default_state: defaults.first().copied(),
            config,
        };

        info!(
            states = machine.states.len(),
            signals = machine.signals.len(),
            transitions = machine.transitions.len(),
            start = machine.states[start].name(),
            default_state = ?machine.default_state().map(|s| s.name()),
            "State machine constructed"
        );

        machine.enter(start);
        machine.cascade()?;
        Ok(machine)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.states[self.current]
    }

    /// The state the machine was constructed with (pure)
    pub fn start_state(&self) -> &S {
        &self.states[self.start]
    }

    /// Submit a signal and return the resulting current state.
    ///
    /// Unmatched signals never fail: they are ignored, or notify the default
    /// state when one exists. After the lookup, output-signal states keep
    /// re-submitting their signal until the current state stops emitting or
    /// an output signal matches no transition.
    /// The only error is a cascade longer than
    /// [`MachineConfig::max_cascade_steps`]; the machine then stays at the
    /// state the cascade reached.
    pub fn send_signal(&mut self, signal: G) -> Result<&S, ConfigurationError> {
        self.dispatch(&signal);
        self.cascade()?;
        Ok(self.current_state())
    }

    /// All states in construction order (pure)
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// All signals in construction order (pure)
    pub fn signals(&self) -> &[G] {
        &self.signals
    }

    /// The transition table in lookup order (pure)
    pub fn transitions(&self) -> &[Transition<S, G>] {
        &self.transitions
    }

    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn has_signal(&self, signal: &G) -> bool {
        self.signals.contains(signal)
    }

    /// Check if some transition leaves the current state on `signal` (pure)
    ///
    /// The default state plays no part in this answer.
    pub fn is_valid_signal(&self, signal: &G) -> bool {
        self.outgoing(self.current).any(|t| t.signal == *signal)
    }

    /// Signals with a transition out of the current state, in table order (pure)
    pub fn valid_signals(&self) -> Vec<&G> {
        self.outgoing(self.current).map(|t| &t.signal).collect()
    }

    pub fn default_state(&self) -> Option<&S> {
        self.default_state.map(|index| &self.states[index])
    }

    pub fn has_default_state(&self) -> bool {
        self.default_state.is_some()
    }

    /// Capabilities cached for `state`, if it belongs to this machine (pure)
    pub fn capabilities_of(&self, state: &S) -> Option<Capabilities> {
        slot_of(&self.states, state).map(|index| self.capabilities[index])
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub(crate) fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub(crate) fn capability_table(&self) -> &[Capabilities] {
        &self.capabilities
    }

    pub(crate) fn start_slot(&self) -> usize {
        self.start
    }

    pub(crate) fn default_slot(&self) -> Option<usize> {
        self.default_state
    }

    fn outgoing(&self, slot: usize) -> impl Iterator<Item = &Transition<S, G>> + '_ {
        self.transitions
            .iter()
            .zip(&self.edges)
            .filter(move |(_, (from, _))| *from == slot)
            .map(|(transition, _)| transition)
    }

    /// Look up the first matching transition and apply it.
    fn dispatch(&mut self, signal: &G) -> Dispatch {
        let current = self.current;
        let target = self
            .transitions
            .iter()
            .zip(&self.edges)
            .find(|(transition, (from, _))| *from == current && transition.signal == *signal)
            .map(|(_, &(_, to))| to);

        match target {
            Some(to) if to == current => {
                trace!(
                    state = self.states[current].name(),
                    ?signal,
                    "Self-transition, no actions"
                );
                Dispatch::Matched
            }
            Some(to) => {
                self.exit(current);
                self.current = to;
                self.enter(to);
                debug!(
                    from = self.states[current].name(),
                    to = self.states[to].name(),
                    ?signal,
                    "Transitioned"
                );
                Dispatch::Matched
            }
            None => match self.default_state {
                Some(default) => {
                    debug!(
                        state = self.states[current].name(),
                        default_state = self.states[default].name(),
                        ?signal,
                        "No transition, notifying default state"
                    );
                    self.notify(default);
                    Dispatch::Unmatched
                }
                None => {
                    trace!(
                        state = self.states[current].name(),
                        ?signal,
                        "No transition, signal ignored"
                    );
                    Dispatch::Unmatched
                }
            },
        }
    }

    /// Re-submit output signals until the current state stops emitting or an
    /// output signal matches no transition.
    fn cascade(&mut self) -> Result<(), ConfigurationError> {
        let limit = self.config.max_cascade_steps;
        let mut steps = 0;

        loop {
            let current = self.current;
            if !self.capabilities[current].has_output_signal() {
                return Ok(());
            }

            if steps == limit {
                let state = self.states[current].name().to_string();
                warn!(limit, state = %state, "Output signal cascade limit reached");
                return Err(ConfigurationError::CascadeLimitExceeded { limit, state });
            }
            steps += 1;

            self.notify(current);
            let Some(signal) = self.states[current].output_signal() else {
                // An absent signal never matches a transition.
                if let Some(default) = self.default_state {
                    debug!(
                        state = self.states[current].name(),
                        default_state = self.states[default].name(),
                        "No output signal, notifying default state"
                    );
                    self.notify(default);
                }
                trace!(
                    state = self.states[current].name(),
                    "No output signal, cascade ends"
                );
                return Ok(());
            };

            trace!(
                state = self.states[current].name(),
                ?signal,
                step = steps,
                "Cascading output signal"
            );
            if self.dispatch(&signal) == Dispatch::Unmatched {
                return Ok(());
            }
        }
    }

    fn enter(&mut self, slot: usize) {
        if self.capabilities[slot].has_entry_action() {
            self.states[slot].after_entry_action();
        }
    }

    fn exit(&mut self, slot: usize) {
        if self.capabilities[slot].has_exit_action() {
            self.states[slot].before_exit_action();
        }
    }

    /// Run both actions of a state without making it current.
    fn notify(&mut self, slot: usize) {
        self.enter(slot);
        self.exit(slot);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dispatch {
    Matched,
    Unmatched,
}

fn slot_of<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|candidate| candidate == item)
}

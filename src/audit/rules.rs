//! Audit rules for machine configurations using Validation.

use crate::audit::findings::Finding;
use crate::core::{Signal, State};
use crate::engine::FiniteStateMachine;
use std::collections::VecDeque;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of an audit: success, or every finding at once.
pub type AuditResult = Validation<(), NonEmptyVec<Finding>>;

/// Type alias for custom audit check functions
pub type AuditCheck<S, G> = Box<dyn Fn(&FiniteStateMachine<S, G>) -> AuditResult + Send + Sync>;

/// Checks run against a built machine.
/// Uses Validation to accumulate ALL findings.
///
/// # Example
///
/// ```rust
/// use stop_fsm::audit::{AuditRules, Finding};
/// use stop_fsm::{FiniteStateMachine, Transition};
/// use stillwater::validation::Validation;
///
/// let machine = FiniteStateMachine::new(
///     vec!["idle", "busy", "orphan"],
///     vec!["go"],
///     vec![Transition::new("idle", "go", "busy")],
///     "idle",
/// )
/// .unwrap();
///
/// let rules = AuditRules::standard().require(|m: &FiniteStateMachine<&str, &str>| {
///     if m.signals().len() > 1 {
///         Validation::success(())
///     } else {
///         Validation::fail(Finding::Custom {
///             message: "expected more than one signal".to_string(),
///         })
///     }
/// });
///
/// match rules.audit(&machine) {
///     Validation::Failure(findings) => assert_eq!(findings.len(), 2),
///     Validation::Success(_) => panic!("expected findings"),
/// }
/// ```
pub struct AuditRules<S, G> {
    standard: bool,
    required_checks: Vec<AuditCheck<S, G>>,
}

impl<S: State<G>, G: Signal> AuditRules<S, G> {
    /// Rules with no checks at all; add some with [`require`](Self::require).
    pub fn new() -> Self {
        Self {
            standard: false,
            required_checks: Vec::new(),
        }
    }

    /// The built-in checks: shadowed transitions, undeclared signals,
    /// unreachable states, dead-end emitters and self-looping emitters.
    pub fn standard() -> Self {
        Self {
            standard: true,
            required_checks: Vec::new(),
        }
    }

    /// Add a custom check.
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&FiniteStateMachine<S, G>) -> AuditResult + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Run all checks, accumulating ALL findings.
    pub fn audit(&self, machine: &FiniteStateMachine<S, G>) -> AuditResult {
        let mut checks: Vec<AuditResult> = Vec::new();

        if self.standard {
            let findings = shadowed_transitions(machine)
                .into_iter()
                .chain(undeclared_signals(machine))
                .chain(unreachable_states(machine))
                .chain(emitter_defects(machine));
            checks.extend(findings.map(Validation::fail));
        }

        for check in &self.required_checks {
            checks.push(check(machine));
        }

        let result = Validation::all_vec(checks).map(|_| ());
        debug!(passed = result.is_success(), "Configuration audit finished");
        result
    }
}

impl<S: State<G>, G: Signal> Default for AuditRules<S, G> {
    fn default() -> Self {
        Self::standard()
    }
}

fn shadowed_transitions<S: State<G>, G: Signal>(machine: &FiniteStateMachine<S, G>) -> Vec<Finding> {
    let transitions = machine.transitions();
    let edges = machine.edges();

    (0..transitions.len())
        .filter_map(|index| {
            (0..index)
                .find(|&earlier| {
                    edges[earlier].0 == edges[index].0
                        && transitions[earlier].signal == transitions[index].signal
                })
                .map(|shadowed_by| Finding::ShadowedTransition {
                    index,
                    shadowed_by,
                    from: transitions[index].from.name().to_string(),
                    signal: format!("{:?}", transitions[index].signal),
                })
        })
        .collect()
}

fn undeclared_signals<S: State<G>, G: Signal>(machine: &FiniteStateMachine<S, G>) -> Vec<Finding> {
    machine
        .transitions()
        .iter()
        .enumerate()
        .filter(|(_, transition)| !machine.has_signal(&transition.signal))
        .map(|(index, transition)| Finding::UndeclaredSignal {
            index,
            signal: format!("{:?}", transition.signal),
        })
        .collect()
}

/// States no sequence of transitions can reach from the start state. The
/// default state is never current through a transition and is skipped.
fn unreachable_states<S: State<G>, G: Signal>(machine: &FiniteStateMachine<S, G>) -> Vec<Finding> {
    let edges = machine.edges();
    let mut reached = vec![false; machine.states().len()];
    let mut queue = VecDeque::from([machine.start_slot()]);
    reached[machine.start_slot()] = true;

    while let Some(slot) = queue.pop_front() {
        for &(_, to) in edges.iter().filter(|(from, _)| *from == slot) {
            if !reached[to] {
                reached[to] = true;
                queue.push_back(to);
            }
        }
    }

    machine
        .states()
        .iter()
        .enumerate()
        .filter(|&(slot, _)| !reached[slot] && machine.default_slot() != Some(slot))
        .map(|(_, state)| Finding::UnreachableState {
            state: state.name().to_string(),
        })
        .collect()
}

fn emitter_defects<S: State<G>, G: Signal>(machine: &FiniteStateMachine<S, G>) -> Vec<Finding> {
    let edges = machine.edges();
    let mut findings = Vec::new();

    for (slot, caps) in machine.capability_table().iter().enumerate() {
        if !caps.has_output_signal() || caps.is_default() {
            continue;
        }
        let state = machine.states()[slot].name().to_string();
        let mut outgoing = edges.iter().filter(|(from, _)| *from == slot).peekable();

        if outgoing.peek().is_none() {
            findings.push(Finding::DeadEndEmitter { state });
        } else if outgoing.any(|&(_, to)| to == slot) {
            findings.push(Finding::SelfLoopEmitter { state });
        }
    }

    findings
}

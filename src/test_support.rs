//! Recording states shared by the unit tests.

use crate::core::{Capabilities, State};
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

pub(crate) fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Drain everything recorded so far.
pub(crate) fn take(journal: &Journal) -> Vec<String> {
    journal.borrow_mut().drain(..).collect()
}

/// A state that writes `enter:<name>` / `exit:<name>` into a shared journal.
///
/// Equality is by name, so clones used in transition lists identify the same
/// state as the instance owned by the machine.
#[derive(Debug, Clone)]
pub(crate) struct Probe {
    pub name: &'static str,
    caps: Capabilities,
    journal: Journal,
    outputs: Vec<&'static str>,
    emitted: usize,
}

impl Probe {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            caps: Capabilities::ACTIONS,
            journal: Rc::clone(journal),
            outputs: Vec::new(),
            emitted: 0,
        }
    }

    pub fn with_caps(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Emit `outputs` round-robin; an empty list emits nothing.
    pub fn emitting(mut self, outputs: &[&'static str]) -> Self {
        self.caps = self.caps.with_output_signal();
        self.outputs = outputs.to_vec();
        self
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl State<&'static str> for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn after_entry_action(&mut self) {
        self.journal.borrow_mut().push(format!("enter:{}", self.name));
    }

    fn before_exit_action(&mut self) {
        self.journal.borrow_mut().push(format!("exit:{}", self.name));
    }

    fn output_signal(&mut self) -> Option<&'static str> {
        if self.outputs.is_empty() {
            return None;
        }
        let signal = self.outputs[self.emitted % self.outputs.len()];
        self.emitted += 1;
        Some(signal)
    }
}

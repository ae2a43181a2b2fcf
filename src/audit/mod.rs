//! Validation-based configuration audit.
//!
//! Construction only rejects tables the engine cannot run. An audit goes
//! further and reports tables that run but are probably wrong, such as a
//! transition that can never fire because an earlier one shadows it, or an
//! emitter whose output signals lead nowhere.
//!
//! Audits use Stillwater's `Validation` type, so every finding is reported in
//! one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use stop_fsm::{FiniteStateMachine, Transition};
//!
//! let machine = FiniteStateMachine::new(
//!     vec!["locked", "unlocked"],
//!     vec!["coin", "push"],
//!     vec![
//!         Transition::new("locked", "coin", "unlocked"),
//!         Transition::new("unlocked", "push", "locked"),
//!     ],
//!     "locked",
//! )
//! .unwrap();
//!
//! assert!(machine.audit().is_success());
//! ```

mod findings;
mod rules;

pub use findings::Finding;
pub use rules::{AuditCheck, AuditResult, AuditRules};

use crate::core::{Signal, State};
use crate::engine::FiniteStateMachine;

impl<S: State<G>, G: Signal> FiniteStateMachine<S, G> {
    /// Run the standard audit checks against this machine.
    pub fn audit(&self) -> AuditResult {
        AuditRules::standard().audit(self)
    }
}

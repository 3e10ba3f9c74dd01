//! Per-control in-flight tracking.
//!
//! Each triggering control moves `Idle -> Pending` on click and back to
//! `Idle` when its remote call settles, success or failure alike.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::error::AdminError;

/// The controls that trigger remote calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The `add` button.
    Add,
    /// The `test` button, also driven by a tree entry's test action.
    Test,
    /// Remove action on a saved-query tree entry.
    Remove,
}

impl ControlId {
    /// DOM id of the control.
    pub fn dom_id(self) -> &'static str {
        match self {
            ControlId::Add => "add",
            ControlId::Test => "test",
            ControlId::Remove => "remove",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// In-flight state of one control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlState {
    /// Enabled, no call in flight.
    #[default]
    Idle,
    /// Disabled while its call is in flight.
    Pending,
}

/// Shared state table for all controls of one panel.
///
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    states: Rc<RefCell<HashMap<ControlId, ControlState>>>,
}

impl ControlSet {
    /// Create a table with every control idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `control`.
    pub fn state(&self, control: ControlId) -> ControlState {
        self.states
            .borrow()
            .get(&control)
            .copied()
            .unwrap_or_default()
    }

    /// Whether `control` has a call in flight.
    pub fn is_pending(&self, control: ControlId) -> bool {
        self.state(control) == ControlState::Pending
    }

    /// Move `control` to `Pending`.
    ///
    /// Fails with [`AdminError::ControlBusy`] if it is already pending.
    pub fn begin(&self, control: ControlId) -> Result<(), AdminError> {
        let mut states = self.states.borrow_mut();
        let state = states.entry(control).or_default();
        if *state == ControlState::Pending {
            return Err(AdminError::ControlBusy(control));
        }
        *state = ControlState::Pending;
        Ok(())
    }

    /// Move `control` back to `Idle`. Returns `false` if it was not pending.
    pub fn settle(&self, control: ControlId) -> bool {
        let mut states = self.states.borrow_mut();
        match states.get_mut(&control) {
            Some(state) if *state == ControlState::Pending => {
                *state = ControlState::Idle;
                true
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlId, ControlSet, ControlState};
    use crate::error::AdminError;

    #[test]
    fn begin_then_settle_round_trips_to_idle() {
        let controls = ControlSet::new();
        assert_eq!(controls.state(ControlId::Add), ControlState::Idle);

        assert!(controls.begin(ControlId::Add).is_ok());
        assert!(controls.is_pending(ControlId::Add));

        assert!(controls.settle(ControlId::Add));
        assert_eq!(controls.state(ControlId::Add), ControlState::Idle);
    }

    #[test]
    fn second_begin_is_refused_while_pending() {
        let controls = ControlSet::new();
        assert!(controls.begin(ControlId::Test).is_ok());
        assert_eq!(
            controls.begin(ControlId::Test),
            Err(AdminError::ControlBusy(ControlId::Test))
        );
    }

    #[test]
    fn settle_on_idle_control_is_a_no_op() {
        let controls = ControlSet::new();
        assert!(!controls.settle(ControlId::Remove));
        assert!(controls.begin(ControlId::Remove).is_ok());
        assert!(controls.settle(ControlId::Remove));
        assert!(!controls.settle(ControlId::Remove));
    }

    #[test]
    fn controls_are_independent_and_clones_share_state() {
        let controls = ControlSet::new();
        let other = controls.clone();
        assert!(controls.begin(ControlId::Add).is_ok());
        assert!(other.is_pending(ControlId::Add));
        assert!(!other.is_pending(ControlId::Test));
        assert!(other.begin(ControlId::Test).is_ok());
    }
}

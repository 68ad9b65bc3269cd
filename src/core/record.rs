//! Transition records: one row of the table.

use super::ids::{ActionId, ConditionId, Param, StateId, ELSE, HALT, NONE};
use serde::{Deserialize, Serialize};

/// A single row of the transition table.
///
/// When the machine is in `state` and `condition` is accepted, `action` is
/// performed and the machine moves to `next_state`. `param` travels with the
/// record and is never interpreted by the engine.
///
/// # Example
///
/// ```rust
/// use statetable::core::{TransitionRecord, NONE};
///
/// let record = TransitionRecord::new(1, 10, NONE, 0, 2);
/// assert_eq!(record.state, 1);
/// assert_eq!(record.next_state, 2);
/// assert!(!record.is_else());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Source state this record belongs to
    pub state: StateId,
    /// Condition evaluated by the condition-check callback
    pub condition: ConditionId,
    /// Action handed to the action callback when the record fires
    pub action: ActionId,
    /// Caller payload, opaque to the engine
    #[serde(default)]
    pub param: Param,
    /// State entered when the record fires
    pub next_state: StateId,
}

impl TransitionRecord {
    pub const fn new(
        state: StateId,
        condition: ConditionId,
        action: ActionId,
        param: Param,
        next_state: StateId,
    ) -> Self {
        Self {
            state,
            condition,
            action,
            param,
            next_state,
        }
    }

    /// The record written at index 0 on every reset.
    ///
    /// Gives `HALT` an always-true, no-op self-loop.
    pub const fn halt_sentinel() -> Self {
        Self::new(HALT, ELSE, NONE, 0, HALT)
    }

    /// True if the record's condition is the always-true else-branch.
    pub fn is_else(&self) -> bool {
        self.condition == ELSE
    }

    /// True if firing this record performs an action.
    pub fn has_action(&self) -> bool {
        self.action != NONE
    }
}

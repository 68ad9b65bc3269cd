//! Identifier types and the reserved values shared between tables and callbacks.
//!
//! States, conditions and actions are plain integers. Their meaning belongs to
//! the caller; the engine only reserves a handful of negative values.

/// Identifier of a state in the transition table.
pub type StateId = i32;

/// Opaque condition identifier resolved by the condition-check callback.
pub type ConditionId = i32;

/// Opaque action identifier resolved by the action callback.
pub type ActionId = i32;

/// Integer payload carried by a transition record.
pub type Param = i32;

/// Terminal (and start) state. Executing in this state does nothing.
pub const HALT: StateId = -1;

/// Condition that is always true, used as the else-branch of a state.
pub const ELSE: ConditionId = -1;

/// Returned by a scan when no further record matches the current state.
pub const BREAK: ConditionId = -2;

/// Action that performs nothing.
pub const NONE: ActionId = -1;

/// Default number of caller-written records a table can hold.
///
/// The halt sentinel occupies its own slot on top of this.
pub const DEFAULT_CAPACITY: usize = 32;

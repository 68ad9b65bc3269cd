//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a table macro for setting up a
//! machine in one expression instead of a sequence of `write` calls.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{StateId, TransitionRecord, ELSE, NONE};

/// Create an unconditional, action-free record from `state` to `next_state`.
///
/// # Example
///
/// ```
/// use statetable::builder::always;
/// use statetable::core::HALT;
///
/// let record = always(3, HALT);
/// assert!(record.is_else());
/// assert!(!record.has_action());
/// ```
pub fn always(state: StateId, next_state: StateId) -> TransitionRecord {
    TransitionRecord::new(state, ELSE, NONE, 0, next_state)
}

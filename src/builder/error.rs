//! Build errors for the machine builder.

use crate::core::TableError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Condition check given without an action callback. Call .on_action(f)")]
    MissingActionCallback,

    #[error("Action callback given without a condition check. Call .on_condition(f)")]
    MissingConditionCheck,
}

//! Table errors.

use thiserror::Error;

/// Errors raised while writing to a transition table.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TableError {
    /// Every slot is taken; the record was not written
    #[error("Transition table is full ({capacity} records)")]
    OutOfCapacity { capacity: usize },
}

//! Table data: identifiers, records and the transition table itself.
//!
//! Nothing in this module calls out to the caller. It is pure bookkeeping
//! over an ordered sequence of records; evaluation lives in [`crate::engine`].

mod error;
mod ids;
mod record;
mod table;

pub use error::TableError;
pub use ids::{
    ActionId, ConditionId, Param, StateId, BREAK, DEFAULT_CAPACITY, ELSE, HALT, NONE,
};
pub use record::TransitionRecord;
pub use table::TransitionTable;

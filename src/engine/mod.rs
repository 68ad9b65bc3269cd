//! Table evaluation: the machine, its callbacks and the execution cycle.
//!
//! # Key Concepts
//!
//! - **Machine**: owns a transition table, the current state and a scan cursor
//! - **Callbacks**: caller hooks that decide conditions and perform actions
//! - **Step**: outcome of one execution cycle (at most one transition)

mod callbacks;
mod machine;

pub use callbacks::{Callbacks, ConditionCheck, PerformAction};
pub use machine::{Machine, Step};

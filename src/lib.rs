//! Statetable: a table-driven finite state machine engine
//!
//! Statetable keeps a machine's behavior in data. Each row of a transition
//! table says "in this state, if this condition holds, perform this action and
//! move to that state". The engine interprets the table; what conditions and
//! actions mean is decided by two caller-supplied callbacks. This keeps the
//! engine free of domain logic, which suits control loops on small
//! controllers such as robot behavior sequencing.
//!
//! # Core Concepts
//!
//! - **Transition table**: ordered, fixed-capacity rows scanned first to last
//! - **Machine**: current state, scan cursor and the execution cycle
//! - **Callbacks**: condition check and action hooks owned by the caller
//!
//! # Example
//!
//! ```rust
//! use statetable::core::{ELSE, HALT, NONE};
//! use statetable::engine::Machine;
//! use std::cell::Cell;
//!
//! const SEARCH: i32 = 0;
//! const APPROACH: i32 = 1;
//! const TARGET_SEEN: i32 = 10;
//! const DRIVE: i32 = 20;
//!
//! let speed = Cell::new(0);
//! let mut machine = Machine::new();
//! machine.write(SEARCH, TARGET_SEEN, DRIVE, 120, APPROACH).unwrap();
//! machine.write(APPROACH, ELSE, NONE, 0, HALT).unwrap();
//! machine.register(
//!     |condition| condition == TARGET_SEEN,
//!     |action| if action == DRIVE { speed.set(120) },
//! );
//!
//! machine.set(SEARCH);
//! machine.execute();
//! assert_eq!(machine.state(), APPROACH);
//! assert_eq!(speed.get(), 120);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{ConfigError, MachineConfig};
pub use self::core::{
    ActionId, ConditionId, Param, StateId, TableError, TransitionRecord, TransitionTable, BREAK,
    DEFAULT_CAPACITY, ELSE, HALT, NONE,
};
pub use engine::{Callbacks, Machine, Step};

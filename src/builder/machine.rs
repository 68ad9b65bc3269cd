//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{
    ActionId, ConditionId, Param, StateId, TransitionRecord, DEFAULT_CAPACITY, HALT,
};
use crate::engine::{ConditionCheck, Machine, PerformAction};

/// Builder for constructing machines with a fluent API.
///
/// Records keep the order they were added in, which is the order the machine
/// tries them.
pub struct MachineBuilder<'a> {
    capacity: usize,
    initial: StateId,
    records: Vec<TransitionRecord>,
    condition_check: Option<ConditionCheck<'a>>,
    perform_action: Option<PerformAction<'a>>,
}

impl<'a> MachineBuilder<'a> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            initial: HALT,
            records: Vec::new(),
            condition_check: None,
            perform_action: None,
        }
    }

    /// Set the table capacity (defaults to [`DEFAULT_CAPACITY`]).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the state entered after the table is written (defaults to `HALT`).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = state;
        self
    }

    /// Add a transition from its five fields.
    pub fn transition(
        self,
        state: StateId,
        condition: ConditionId,
        action: ActionId,
        param: Param,
        next_state: StateId,
    ) -> Self {
        self.record(TransitionRecord::new(
            state, condition, action, param, next_state,
        ))
    }

    /// Add a pre-built record.
    pub fn record(mut self, record: TransitionRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Add multiple records at once.
    pub fn records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = TransitionRecord>,
    {
        self.records.extend(records);
        self
    }

    /// Set the condition-check callback.
    pub fn on_condition<F>(mut self, condition_check: F) -> Self
    where
        F: FnMut(ConditionId) -> bool + 'a,
    {
        self.condition_check = Some(Box::new(condition_check));
        self
    }

    /// Set the action callback.
    pub fn on_action<F>(mut self, perform_action: F) -> Self
    where
        F: FnMut(ActionId) + 'a,
    {
        self.perform_action = Some(Box::new(perform_action));
        self
    }

    /// Build the machine.
    ///
    /// Fails if the records do not fit the capacity or if only one of the two
    /// callbacks was supplied. An initial state with no records leaves the
    /// machine halted.
    pub fn build(self) -> Result<Machine<'a>, BuildError> {
        let mut machine = Machine::with_capacity(self.capacity);
        for record in self.records {
            machine.write_record(record)?;
        }

        match (self.condition_check, self.perform_action) {
            (Some(condition_check), Some(perform_action)) => {
                machine.register(condition_check, perform_action);
            }
            (Some(_), None) => return Err(BuildError::MissingActionCallback),
            (None, Some(_)) => return Err(BuildError::MissingConditionCheck),
            (None, None) => {}
        }

        machine.set(self.initial);
        Ok(machine)
    }
}

impl Default for MachineBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

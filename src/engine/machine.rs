//! Table-driven state machine and its execution cycle.

use crate::core::{
    ActionId, ConditionId, Param, StateId, TableError, TransitionRecord, TransitionTable, BREAK,
    ELSE, HALT, NONE,
};
use crate::engine::callbacks::Callbacks;
use tracing::{debug, trace, warn};

/// Outcome of a single [`Machine::execute`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The machine is in `HALT`; nothing was evaluated
    Halted,

    /// No record for the current state was accepted this cycle
    Idle,

    /// A record fired and the machine moved to `to`
    ///
    /// `to` differs from `record.next_state` only when the target state has
    /// no records, in which case the machine fell back to `HALT`.
    Transitioned {
        from: StateId,
        to: StateId,
        record: TransitionRecord,
    },
}

impl Step {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Finite state machine interpreting a [`TransitionTable`].
///
/// The machine owns its table, the current state and a scan cursor. What a
/// condition means and what an action does are left to the registered
/// [`Callbacks`]; the machine only walks the table.
///
/// A machine is a single-threaded object. It holds `FnMut` callbacks and is
/// not `Sync`; sharing one across contexts needs external locking.
///
/// # Example
///
/// ```rust
/// use statetable::engine::{Machine, Step};
/// use statetable::core::{ELSE, HALT, NONE};
///
/// const IDLE: i32 = 0;
/// const MOVING: i32 = 1;
/// const BUTTON: i32 = 10;
/// const START_MOTOR: i32 = 20;
///
/// let mut machine = Machine::new();
/// machine.write(IDLE, BUTTON, START_MOTOR, 255, MOVING).unwrap();
/// machine.write(MOVING, ELSE, NONE, 0, HALT).unwrap();
/// machine.register(|condition| condition == BUTTON, |_action| {});
///
/// machine.set(IDLE);
/// assert!(machine.execute().is_transition());
/// assert_eq!(machine.state(), MOVING);
/// assert!(machine.execute().is_transition());
/// assert_eq!(machine.execute(), Step::Halted);
/// ```
#[derive(Debug)]
pub struct Machine<'a> {
    table: TransitionTable,
    current: StateId,
    cursor: Option<usize>,
    callbacks: Option<Callbacks<'a>>,
}

impl Default for Machine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Machine<'a> {
    /// Create a halted machine with the default table capacity.
    pub fn new() -> Self {
        Self::from_table(TransitionTable::new())
    }

    /// Create a halted machine holding up to `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_table(TransitionTable::with_capacity(capacity))
    }

    fn from_table(table: TransitionTable) -> Self {
        let mut machine = Self {
            table,
            current: HALT,
            cursor: None,
            callbacks: None,
        };
        machine.reset();
        machine
    }

    /// Clear the table back to the sentinel and halt.
    ///
    /// Capacity and registered callbacks survive a reset.
    pub fn reset(&mut self) {
        self.table.reset();
        self.cursor = None;
        self.current = HALT;
        debug!(capacity = self.table.capacity(), "Machine reset");
    }

    /// Append a transition record to the table.
    pub fn write(
        &mut self,
        state: StateId,
        condition: ConditionId,
        action: ActionId,
        param: Param,
        next_state: StateId,
    ) -> Result<(), TableError> {
        self.write_record(TransitionRecord::new(
            state, condition, action, param, next_state,
        ))
    }

    pub fn write_record(&mut self, record: TransitionRecord) -> Result<(), TableError> {
        let index = self.table.write(record)?;
        trace!(index, state = record.state, next = record.next_state, "Record written");
        Ok(())
    }

    /// Register the condition-check and action hooks.
    ///
    /// Registering again replaces the previous pair.
    pub fn register<C, A>(&mut self, condition_check: C, perform_action: A)
    where
        C: FnMut(ConditionId) -> bool + 'a,
        A: FnMut(ActionId) + 'a,
    {
        self.register_callbacks(Callbacks::new(condition_check, perform_action));
    }

    pub fn register_callbacks(&mut self, callbacks: Callbacks<'a>) {
        self.callbacks = Some(callbacks);
    }

    /// Scan forward for the next record of the current state.
    ///
    /// Returns that record's condition, or [`BREAK`] once the table is
    /// exhausted. Exhaustion rewinds the cursor, so the following call starts
    /// a new pass from the top.
    pub fn next(&mut self) -> ConditionId {
        match self.advance() {
            Some(index) => self.table.records()[index].condition,
            None => BREAK,
        }
    }

    fn advance(&mut self) -> Option<usize> {
        let start = self.cursor.map_or(0, |index| index + 1);
        self.cursor = self.table.find_from(start, self.current);
        if let Some(index) = self.cursor {
            trace!(state = self.current, index, "Matched record");
        }
        self.cursor
    }

    /// Forget the active match so the next scan starts from the first record.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    /// Enter `new_state` if the table has any record for it, otherwise halt.
    ///
    /// An unknown state is not an error: the machine silently degrades to
    /// `HALT`. Always rewinds the cursor.
    pub fn set(&mut self, new_state: StateId) {
        if self.table.contains_state(new_state) {
            self.current = new_state;
        } else {
            warn!(state = new_state, "Unknown state, halting");
            self.current = HALT;
        }
        self.cursor = None;
    }

    /// Move to the next state of the record under the cursor.
    pub fn set_next(&mut self) {
        self.set(self.next_state());
    }

    /// Record under the scan cursor, if a scan has matched one.
    pub fn current_record(&self) -> Option<&TransitionRecord> {
        self.cursor.and_then(|index| self.table.get(index))
    }

    pub fn condition(&self) -> ConditionId {
        self.current_record().map_or(BREAK, |record| record.condition)
    }

    pub fn action(&self) -> ActionId {
        self.current_record().map_or(NONE, |record| record.action)
    }

    pub fn param(&self) -> Param {
        self.current_record().map_or(0, |record| record.param)
    }

    pub fn next_state(&self) -> StateId {
        self.current_record().map_or(HALT, |record| record.next_state)
    }

    pub fn state(&self) -> StateId {
        self.current
    }

    pub fn is_halted(&self) -> bool {
        self.current == HALT
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Run one execution cycle.
    ///
    /// Records of the current state are tried in table order. `ELSE` is
    /// accepted outright; every other condition goes to the condition-check
    /// callback. The first accepted record performs its action (unless it is
    /// `NONE`) and moves the machine to its next state. At most one
    /// transition happens per call.
    pub fn execute(&mut self) -> Step {
        if self.is_halted() {
            return Step::Halted;
        }

        self.rewind();
        while let Some(index) = self.advance() {
            let record = self.table.records()[index];
            if !self.accepts(record.condition) {
                continue;
            }

            if record.has_action() {
                if let Some(callbacks) = self.callbacks.as_mut() {
                    callbacks.perform(record.action);
                }
            }

            let from = self.current;
            self.set_next();
            let to = self.current;
            debug!(
                from,
                to,
                condition = record.condition,
                action = record.action,
                param = record.param,
                "Transition fired"
            );
            return Step::Transitioned { from, to, record };
        }

        trace!(state = self.current, "No condition accepted");
        Step::Idle
    }

    fn accepts(&mut self, condition: ConditionId) -> bool {
        if condition == ELSE {
            return true;
        }
        self.callbacks
            .as_mut()
            .is_some_and(|callbacks| callbacks.check(condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    const S1: StateId = 1;
    const S2: StateId = 2;
    const S3: StateId = 3;
    const COND_A: ConditionId = 10;
    const COND_B: ConditionId = 11;
    const ACT_X: ActionId = 20;
    const ACT_Y: ActionId = 21;

    #[test]
    fn fresh_machine_is_halted() {
        let mut machine = Machine::new();

        assert_eq!(machine.state(), HALT);
        assert_eq!(machine.execute(), Step::Halted);
        assert_eq!(machine.state(), HALT);
    }

    #[test]
    fn set_unknown_state_halts() {
        let mut machine = Machine::new();
        machine.write(S1, ELSE, NONE, 0, S2).unwrap();

        machine.set(S3);

        assert_eq!(machine.state(), HALT);
    }

    #[test]
    fn set_known_state_enters_it() {
        let mut machine = Machine::new();
        machine.write(S1, ELSE, NONE, 0, S2).unwrap();

        machine.set(S1);

        assert_eq!(machine.state(), S1);
        assert_eq!(machine.cursor(), None);
    }

    #[test]
    fn next_scans_only_current_state_in_order() {
        let mut machine = Machine::new();
        machine.write(S1, COND_A, NONE, 0, S2).unwrap();
        machine.write(S2, COND_B, NONE, 0, S1).unwrap();
        machine.write(S1, COND_B, NONE, 0, S3).unwrap();
        machine.set(S1);

        assert_eq!(machine.next(), COND_A);
        assert_eq!(machine.cursor(), Some(1));
        assert_eq!(machine.next(), COND_B);
        assert_eq!(machine.cursor(), Some(3));
        assert_eq!(machine.next(), BREAK);
        assert_eq!(machine.cursor(), None);
        // Exhaustion rewinds, so scanning starts over
        assert_eq!(machine.next(), COND_A);
    }

    #[test]
    fn accessors_without_match_return_empty_values() {
        let machine = Machine::new();

        assert_eq!(machine.condition(), BREAK);
        assert_eq!(machine.action(), NONE);
        assert_eq!(machine.param(), 0);
        assert_eq!(machine.next_state(), HALT);
    }

    #[test]
    fn manual_cycle_reads_param_before_moving() {
        let mut machine = Machine::new();
        machine.write(S1, COND_A, ACT_X, 5, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.set(S1);

        assert_eq!(machine.next(), COND_A);
        assert_eq!(machine.action(), ACT_X);
        assert_eq!(machine.param(), 5);
        machine.set_next();

        assert_eq!(machine.state(), S2);
        assert_eq!(machine.param(), 0);
    }

    #[test]
    fn execute_fires_accepted_record() {
        let performed = RefCell::new(Vec::new());
        let mut machine = Machine::new();
        machine.write(S1, COND_A, ACT_X, 5, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, S2).unwrap();
        machine.register(
            |condition| condition == COND_A,
            |action| performed.borrow_mut().push(action),
        );
        machine.set(S1);

        let step = machine.execute();

        assert_eq!(
            step,
            Step::Transitioned {
                from: S1,
                to: S2,
                record: TransitionRecord::new(S1, COND_A, ACT_X, 5, S2),
            }
        );
        assert_eq!(machine.state(), S2);
        assert_eq!(*performed.borrow(), vec![ACT_X]);
    }

    #[test]
    fn execute_skips_rejected_conditions() {
        let performed = RefCell::new(Vec::new());
        let mut machine = Machine::new();
        machine.write(S1, COND_A, ACT_X, 0, S2).unwrap();
        machine.write(S1, COND_B, ACT_Y, 0, S3).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.write(S3, ELSE, NONE, 0, HALT).unwrap();
        machine.register(
            |condition| condition == COND_B,
            |action| performed.borrow_mut().push(action),
        );
        machine.set(S1);

        machine.execute();

        assert_eq!(*performed.borrow(), vec![ACT_Y]);
        assert_eq!(machine.state(), S3);
    }

    #[test]
    fn execute_fires_only_first_accepted_record() {
        let checks = Cell::new(0);
        let mut machine = Machine::new();
        machine.write(S1, COND_A, NONE, 0, S2).unwrap();
        machine.write(S1, COND_B, NONE, 0, S3).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.write(S3, ELSE, NONE, 0, HALT).unwrap();
        machine.register(
            |_| {
                checks.set(checks.get() + 1);
                true
            },
            |_| {},
        );
        machine.set(S1);

        machine.execute();

        assert_eq!(machine.state(), S2);
        assert_eq!(checks.get(), 1);
    }

    #[test]
    fn execute_without_acceptance_stays_put() {
        let performed = Cell::new(0);
        let mut machine = Machine::new();
        machine.write(S1, COND_A, ACT_X, 0, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.register(|_| false, |_| performed.set(performed.get() + 1));
        machine.set(S1);

        assert_eq!(machine.execute(), Step::Idle);
        assert_eq!(machine.execute(), Step::Idle);
        assert_eq!(machine.state(), S1);
        assert_eq!(performed.get(), 0);
    }

    #[test]
    fn execute_repolls_until_condition_holds() {
        let ready = Cell::new(false);
        let mut machine = Machine::new();
        machine.write(S1, COND_A, NONE, 0, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.register(|condition| condition == COND_A && ready.get(), |_| {});
        machine.set(S1);

        assert_eq!(machine.execute(), Step::Idle);
        ready.set(true);
        assert!(machine.execute().is_transition());
        assert_eq!(machine.state(), S2);
    }

    #[test]
    fn else_is_accepted_without_consulting_callback() {
        let checks = Cell::new(0);
        let mut machine = Machine::new();
        machine.write(S1, ELSE, NONE, 0, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.register(
            |_| {
                checks.set(checks.get() + 1);
                false
            },
            |_| {},
        );
        machine.set(S1);

        assert!(machine.execute().is_transition());
        assert_eq!(machine.state(), S2);
        assert_eq!(checks.get(), 0);
    }

    #[test]
    fn execute_without_callbacks_follows_else_only() {
        let mut machine = Machine::new();
        machine.write(S1, COND_A, NONE, 0, S3).unwrap();
        machine.write(S1, ELSE, NONE, 0, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.set(S1);

        machine.execute();

        assert_eq!(machine.state(), S2);
    }

    #[test]
    fn none_action_is_not_performed() {
        let performed = Cell::new(0);
        let mut machine = Machine::new();
        machine.write(S1, ELSE, NONE, 0, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, HALT).unwrap();
        machine.register(|_| true, |_| performed.set(performed.get() + 1));
        machine.set(S1);

        machine.execute();

        assert_eq!(performed.get(), 0);
    }

    #[test]
    fn transition_to_unknown_state_halts() {
        let mut machine = Machine::new();
        machine.write(S1, ELSE, NONE, 0, S3).unwrap();
        machine.set(S1);

        let step = machine.execute();

        assert!(matches!(step, Step::Transitioned { from: S1, to: HALT, .. }));
        assert!(machine.is_halted());
    }

    #[test]
    fn reset_clears_table_and_halts() {
        let mut machine = Machine::with_capacity(4);
        machine.write(S1, ELSE, NONE, 0, S1).unwrap();
        machine.set(S1);

        machine.reset();

        assert!(machine.is_halted());
        assert!(machine.table().is_empty());
        assert_eq!(machine.table().capacity(), 4);
        machine.set(S1);
        assert!(machine.is_halted());
    }

    #[test]
    fn write_reports_capacity_error() {
        let mut machine = Machine::with_capacity(2);
        machine.write(S1, ELSE, NONE, 0, S2).unwrap();
        machine.write(S2, ELSE, NONE, 0, S1).unwrap();

        let result = machine.write(S3, ELSE, NONE, 0, S1);

        assert_eq!(result, Err(TableError::OutOfCapacity { capacity: 2 }));
        assert_eq!(machine.table().len(), 2);
    }

    #[test]
    fn machines_do_not_share_state() {
        let mut first = Machine::new();
        let mut second = Machine::new();
        first.write(S1, ELSE, NONE, 0, S1).unwrap();
        second.write(S2, ELSE, NONE, 0, S2).unwrap();

        first.set(S1);
        second.set(S2);
        first.next();

        assert_eq!(first.state(), S1);
        assert_eq!(second.state(), S2);
        assert_eq!(second.cursor(), None);
    }
}

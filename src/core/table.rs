//! Fixed-capacity, append-only transition table.

use super::error::TableError;
use super::ids::{StateId, DEFAULT_CAPACITY};
use super::record::TransitionRecord;

/// Ordered table of transition records.
///
/// Index 0 always holds the halt sentinel. Records written by the caller
/// follow in insertion order, and lookups walk them linearly: the order rows
/// were written is the order they are tried.
///
/// # Example
///
/// ```rust
/// use statetable::core::{TransitionTable, TransitionRecord, ELSE, NONE};
///
/// let mut table = TransitionTable::with_capacity(2);
/// table.write(TransitionRecord::new(1, ELSE, NONE, 0, 2)).unwrap();
/// table.write(TransitionRecord::new(2, ELSE, NONE, 0, 1)).unwrap();
/// assert!(table.write(TransitionRecord::new(3, ELSE, NONE, 0, 1)).is_err());
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.high_water_mark(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable {
    records: Vec<TransitionRecord>,
    capacity: usize,
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionTable {
    /// Create a table holding up to [`DEFAULT_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table holding up to `capacity` caller-written records.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut records = Vec::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1);
        records.push(TransitionRecord::halt_sentinel());
        Self { records, capacity }
    }

    /// Drop every caller-written record, keeping only the sentinel.
    pub fn reset(&mut self) {
        self.records.clear();
        self.records.push(TransitionRecord::halt_sentinel());
    }

    /// Append a record after the last written one.
    ///
    /// Fails without touching the table once `capacity` records are present.
    pub fn write(&mut self, record: TransitionRecord) -> Result<usize, TableError> {
        if self.len() >= self.capacity {
            return Err(TableError::OutOfCapacity {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(self.high_water_mark())
    }

    /// Index of the first record at or after `start` whose state is `state`.
    pub fn find_from(&self, start: usize, state: StateId) -> Option<usize> {
        self.records
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, record)| record.state == state)
            .map(|(index, _)| index)
    }

    /// True if any record, sentinel included, belongs to `state`.
    pub fn contains_state(&self, state: StateId) -> bool {
        self.find_from(0, state).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&TransitionRecord> {
        self.records.get(index)
    }

    /// Index of the last written record. The sentinel makes this at least 0.
    pub fn high_water_mark(&self) -> usize {
        self.records.len() - 1
    }

    /// Number of caller-written records, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.records.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All records in scan order, sentinel first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}

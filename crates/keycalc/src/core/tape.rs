//! Calculation tape
//!
//! A bounded record of completed evaluations, oldest first, the way a printing
//! desk calculator keeps its paper roll.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One completed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// Left operand as it was displayed
    pub lhs: String,
    /// Operator applied
    pub operator: Operator,
    /// Right operand as it was displayed
    pub rhs: String,
    /// Formatted result
    pub result: String,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(lhs: String, operator: Operator, rhs: String, result: String) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
        }
    }

    /// Returns a formatted line, e.g. `5 + 3 = 8`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {} {} = {}", self.lhs, self.operator, self.rhs, self.result)
    }
}

/// Bounded tape; the oldest entry falls off when full
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape holding at most `capacity` entries (0 disables recording)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Appends an entry, dropping the oldest if the tape is full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Formatted lines, oldest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(TapeEntry::display).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lhs: &str, op: Operator, rhs: &str, result: &str) -> TapeEntry {
        TapeEntry::new(lhs.into(), op, rhs.into(), result.into())
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(
            entry("5", Operator::Add, "3", "8").display(),
            "5 + 3 = 8"
        );
        assert_eq!(
            entry("1", Operator::Divide, "3", "0.33333333").display(),
            "1 ÷ 3 = 0.33333333"
        );
    }

    #[test]
    fn test_tape_new() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert_eq!(tape.capacity(), Tape::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_tape_capacity_enforced() {
        let mut tape = Tape::with_capacity(2);
        tape.push(entry("1", Operator::Add, "1", "2"));
        tape.push(entry("2", Operator::Add, "2", "4"));
        tape.push(entry("3", Operator::Add, "3", "6"));

        assert_eq!(tape.len(), 2);
        assert_eq!(tape.iter().next().unwrap().result, "4");
        assert_eq!(tape.last().unwrap().result, "6");
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut tape = Tape::with_capacity(0);
        tape.push(entry("1", Operator::Add, "1", "2"));
        assert!(tape.is_empty());
    }

    #[test]
    fn test_tape_clear() {
        let mut tape = Tape::new();
        tape.push(entry("1", Operator::Add, "1", "2"));
        tape.clear();
        assert!(tape.is_empty());
    }

    #[test]
    fn test_tape_lines() {
        let mut tape = Tape::new();
        tape.push(entry("2", Operator::Add, "3", "5"));
        tape.push(entry("5", Operator::Multiply, "4", "20"));
        assert_eq!(tape.lines(), vec!["2 + 3 = 5", "5 × 4 = 20"]);
    }
}

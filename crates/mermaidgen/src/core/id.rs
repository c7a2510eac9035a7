//! Identity allocation for graph-style diagram elements
//!
//! Every flowchart owns one generator, so identifiers are unique within a
//! single diagram only. Nodes and subgraphs draw from the same sequence.

use std::fmt;

/// Source of unique numeric identifiers
///
/// Implementations must return strictly increasing values with no repeats
/// for the lifetime of the generator. Tests inject their own generator to
/// get predictable identifiers.
pub trait IdGenerator: fmt::Debug + Send {
    /// Return the next identifier in the sequence
    fn next_id(&mut self) -> u64;
}

/// Default generator: 0, 1, 2, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose first identifier is `start`
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_zero() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_starting_at() {
        let mut ids = SequentialIdGenerator::starting_at(40);
        assert_eq!(ids.next_id(), 40);
        assert_eq!(ids.next_id(), 41);
    }

    #[test]
    fn test_independent_generators() {
        let mut a = SequentialIdGenerator::new();
        let mut b = SequentialIdGenerator::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 0);
        assert_eq!(a.next_id(), 2);
    }
}

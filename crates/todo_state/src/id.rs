//! Id generation
//!
//! Ids are minted through an injected generator so uniqueness can be
//! deterministic in tests. The controller re-draws on collision, so a
//! generator only has to eventually produce an id not already in the list.

use rand::Rng;

/// Source of candidate item ids.
pub trait IdGenerator: Send {
    /// Produce the next candidate id. Repeated calls must eventually yield
    /// a value distinct from any finite set of prior results.
    fn next_id(&mut self) -> u64;
}

/// Monotonic counter. Deterministic; the default generator.
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Random ids in `0..1_000_000`, matching the original demo's scheme.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> u64 {
        rand::thread_rng().gen_range(0..1_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_increment() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_sequential_ids_starting_point() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), 100);
    }

    #[test]
    fn test_random_ids_in_range() {
        let mut ids = RandomIds;
        for _ in 0..50 {
            assert!(ids.next_id() < 1_000_000);
        }
    }
}

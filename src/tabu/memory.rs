//! Bounded FIFO tabu memory.

use std::collections::{HashMap, VecDeque};

/// A 2-opt move, identified by the `(i, j)` positions whose segment it
/// reversed.
pub type TabuMove = (usize, usize);

/// Fixed-capacity FIFO of recently applied moves.
///
/// Holds at most `capacity` entries; pushing onto a full memory evicts the
/// oldest. Membership is O(1): the queue keeps insertion order and a
/// multiplicity map answers `contains`.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// memory.push((1, 2));
/// memory.push((1, 3));
/// assert_eq!(memory.push((2, 3)), Some((1, 2)));
/// assert!(!memory.contains((1, 2)));
/// assert_eq!(memory.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<TabuMove>,
    counts: HashMap<TabuMove, usize>,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` moves.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Records a move, returning the move evicted to make room, if any.
    ///
    /// With zero capacity nothing is kept and the move itself is returned.
    pub fn push(&mut self, mv: TabuMove) -> Option<TabuMove> {
        if self.capacity == 0 {
            return Some(mv);
        }
        let evicted = if self.queue.len() >= self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            self.forget(old);
        }
        self.queue.push_back(mv);
        *self.counts.entry(mv).or_insert(0) += 1;
        evicted
    }

    fn forget(&mut self, mv: TabuMove) {
        if let Some(count) = self.counts.get_mut(&mv) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&mv);
            }
        }
    }

    /// Returns `true` if the move is currently tabu.
    pub fn contains(&self, mv: TabuMove) -> bool {
        self.counts.contains_key(&mv)
    }

    /// Number of moves held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no move is held.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of moves held (the tabu tenure).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TabuMove> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fifo_eviction() {
        let mut memory = TabuMemory::new(3);
        assert_eq!(memory.push((1, 2)), None);
        assert_eq!(memory.push((1, 3)), None);
        assert_eq!(memory.push((2, 4)), None);
        assert_eq!(memory.push((3, 4)), Some((1, 2)));
        assert_eq!(memory.push((1, 4)), Some((1, 3)));
        let order: Vec<_> = memory.iter().copied().collect();
        assert_eq!(order, vec![(2, 4), (3, 4), (1, 4)]);
    }

    #[test]
    fn test_memory_never_exceeds_capacity() {
        let mut memory = TabuMemory::new(4);
        for k in 0..20 {
            memory.push((k, k + 1));
            assert!(memory.len() <= memory.capacity());
        }
        assert_eq!(memory.len(), 4);
        assert!(memory.contains((19, 20)));
        assert!(!memory.contains((15, 16)));
    }

    #[test]
    fn test_memory_zero_capacity() {
        let mut memory = TabuMemory::new(0);
        assert_eq!(memory.push((1, 2)), Some((1, 2)));
        assert!(memory.is_empty());
        assert!(!memory.contains((1, 2)));
    }

    #[test]
    fn test_memory_duplicate_stays_tabu_until_last_copy_leaves() {
        let mut memory = TabuMemory::new(2);
        memory.push((1, 2));
        memory.push((1, 2));
        memory.push((3, 4));
        // The older copy left; the newer one is still held.
        assert!(memory.contains((1, 2)));
        memory.push((5, 6));
        assert!(!memory.contains((1, 2)));
    }
}

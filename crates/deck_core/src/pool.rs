use std::collections::VecDeque;

use crate::Spot;

/// Default capacity bound for the sliding-window pool.
pub const DEFAULT_MAX_POOL_SIZE: usize = 200;

/// Bounded buffer of fetched-but-not-yet-shown spots.
///
/// Spots are appended in fetch-arrival order and evicted from the front once
/// the bound is exceeded. The backing storage is never reordered; the
/// scheduler shuffles its own copy, so eviction stays FIFO no matter how
/// often batches are drawn.
#[derive(Debug, Clone)]
pub struct SpotPool {
    spots: VecDeque<Spot>,
    max_size: usize,
}

impl SpotPool {
    /// Creates an empty pool with the given capacity bound.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is zero.
    pub fn new(max_size: usize) -> Self {
        assert!(max_size > 0, "pool bound must be positive");
        Self {
            spots: VecDeque::new(),
            max_size,
        }
    }

    /// Appends `fresh` spots (already deduplicated by the caller) and evicts
    /// the oldest entries until the bound holds again.
    ///
    /// Absorbing an empty batch is a no-op. Absorbing more than `max_size`
    /// spots in one call retains exactly the most recent `max_size`.
    pub fn absorb(&mut self, fresh: Vec<Spot>) {
        if fresh.is_empty() {
            return;
        }
        self.spots.extend(fresh);
        while self.spots.len() > self.max_size {
            self.spots.pop_front();
        }
    }

    /// Copies the pool contents for the scheduler to shuffle.
    pub fn snapshot(&self) -> Vec<Spot> {
        self.spots.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

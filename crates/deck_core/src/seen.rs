use std::collections::HashSet;

use crate::{Spot, SpotId};

/// Session-local deduplication set of ingested spot identifiers.
///
/// Grows monotonically for the lifetime of one browsing session and is
/// discarded with it. Dedupe happens at ingestion, not at display: a spot
/// already on the deck keeps its pool copy.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    ids: HashSet<SpotId>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &SpotId) -> bool {
        self.ids.contains(id)
    }

    /// Marks an identifier as seen. Returns `true` only for first-seen ids.
    pub fn mark(&mut self, id: SpotId) -> bool {
        self.ids.insert(id)
    }

    /// Retains only spots whose id was not seen before, marking them seen in
    /// the same pass. Order is preserved; duplicates within `spots` itself
    /// are also collapsed to their first occurrence.
    pub fn filter_fresh(&mut self, spots: Vec<Spot>) -> Vec<Spot> {
        spots
            .into_iter()
            .filter(|spot| self.mark(spot.id.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

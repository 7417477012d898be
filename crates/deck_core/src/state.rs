use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::pool::DEFAULT_MAX_POOL_SIZE;
use crate::view_model::{DeckViewModel, SpotCardView};
use crate::{Cursor, SeenSet, Spot, SpotId, SpotPool};

/// Default number of cards the surface consumes per batch signal.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// The very first batch of a session is drawn oversized so the user starts
/// with a comfortable deck before replenishment engages.
const INITIAL_BATCH_MULTIPLIER: usize = 3;
const REFILL_BATCH_MULTIPLIER: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub batch_size: usize,
    pub max_pool_size: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        }
    }
}

/// One browsing session's deck state.
///
/// Owned by the presentation surface's lifetime; everything here is
/// in-memory only and discarded on unmount. All mutation goes through
/// [`crate::update`], which the app layer calls from a single event loop.
#[derive(Debug, Clone)]
pub struct DeckState {
    config: DeckConfig,
    pool: SpotPool,
    seen: SeenSet,
    displayed: Vec<Spot>,
    cursor: Option<Cursor>,
    exhausted: bool,
    settling: bool,
    rng: StdRng,
    dirty: bool,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

impl DeckState {
    pub fn new(config: DeckConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic construction for tests: the shuffle order is fully
    /// determined by `seed` and the sequence of applied messages.
    pub fn with_seed(config: DeckConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: DeckConfig, rng: StdRng) -> Self {
        let max_pool_size = config.max_pool_size;
        Self {
            config,
            pool: SpotPool::new(max_pool_size),
            seen: SeenSet::new(),
            displayed: Vec::new(),
            cursor: None,
            exhausted: false,
            settling: false,
            rng,
            dirty: false,
        }
    }

    pub fn view(&self) -> DeckViewModel {
        DeckViewModel {
            cards: self.displayed.iter().map(SpotCardView::from_spot).collect(),
            pool_len: self.pool.len(),
            loading: self.pool.is_empty() && !self.exhausted,
            upstream_exhausted: self.exhausted,
            dirty: self.dirty,
        }
    }

    /// Spots already surfaced to the user, oldest first. Append-only.
    pub fn displayed(&self) -> &[Spot] {
        &self.displayed
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn pool(&self) -> &SpotPool {
        &self.pool
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_settling(&self) -> bool {
        self.settling
    }

    pub(crate) fn clear_settling(&mut self) {
        self.settling = false;
    }

    /// Whether the upstream listing can still yield new pages.
    pub(crate) fn can_fetch(&self) -> bool {
        !self.exhausted
    }

    pub(crate) fn next_fetch_cursor(&self) -> Option<Cursor> {
        self.cursor.clone()
    }

    /// Drops all session state except configuration and the random source.
    pub(crate) fn reset(&mut self) {
        self.pool = SpotPool::new(self.config.max_pool_size);
        self.seen = SeenSet::new();
        self.displayed = Vec::new();
        self.cursor = None;
        self.exhausted = false;
        self.settling = false;
        self.dirty = true;
    }

    /// Ingests one listing page: seen-set filter, pool absorb, cursor
    /// advance. Returns how many spots were new to the session.
    pub(crate) fn ingest_page(&mut self, spots: Vec<Spot>, next_cursor: Option<Cursor>) -> usize {
        let fresh = self.seen.filter_fresh(spots);
        let fresh_count = fresh.len();
        if fresh_count > 0 {
            self.pool.absorb(fresh);
        }
        self.exhausted = next_cursor.is_none();
        self.cursor = next_cursor;
        self.dirty = true;
        fresh_count
    }

    /// Draws one shuffled batch from the pool and appends it to the deck.
    ///
    /// The pool itself is never mutated here; the shuffle operates on a
    /// copy, so drawn spots stay in the pool until eviction pushes them out.
    /// Returns the number of cards appended (zero only for an empty pool).
    pub(crate) fn draw_batch(&mut self) -> usize {
        if self.pool.is_empty() {
            return 0;
        }

        let multiplier = if self.displayed.is_empty() {
            INITIAL_BATCH_MULTIPLIER
        } else {
            REFILL_BATCH_MULTIPLIER
        };
        let mut candidates = self.pool.snapshot();
        candidates.shuffle(&mut self.rng);
        candidates.truncate(self.config.batch_size * multiplier);

        // Avoid echoing the cards the user just swiped through. If the whole
        // candidate batch was just shown, forward progress wins over
        // anti-repetition and the unfiltered batch goes out anyway.
        let recent: HashSet<SpotId> = self
            .displayed
            .iter()
            .rev()
            .take(self.config.batch_size)
            .map(|spot| spot.id.clone())
            .collect();
        let filtered: Vec<Spot> = candidates
            .iter()
            .filter(|spot| !recent.contains(&spot.id))
            .cloned()
            .collect();
        let batch = if filtered.is_empty() {
            candidates
        } else {
            filtered
        };

        let appended = batch.len();
        self.displayed.extend(batch);
        self.settling = true;
        self.dirty = true;
        appended
    }
}

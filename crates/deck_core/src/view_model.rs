use crate::{Spot, SpotId};

/// Snapshot of the deck for the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckViewModel {
    /// Every card surfaced so far, oldest first.
    pub cards: Vec<SpotCardView>,
    pub pool_len: usize,
    /// The pool is empty but the upstream listing may still deliver.
    pub loading: bool,
    pub upstream_exhausted: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotCardView {
    pub id: SpotId,
    pub title: String,
    pub image_url: String,
    pub place_name: String,
}

impl SpotCardView {
    pub(crate) fn from_spot(spot: &Spot) -> Self {
        Self {
            id: spot.id.clone(),
            title: spot.title.clone(),
            image_url: spot.image_url.clone(),
            place_name: spot.place_name.clone(),
        }
    }
}

//! Deck engine: listing-page fetching and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, HttpPageFetcher, PageFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchedPage, SpotRecord};

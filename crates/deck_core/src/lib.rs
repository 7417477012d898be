//! Deck core: pure state machine for the discovery deck.
//!
//! Owns the session-local content pool, the seen-set, and the
//! shuffle-and-batch scheduler. No IO and no clock; the app layer executes
//! the returned effects and feeds results back as messages.
mod effect;
mod msg;
mod pool;
mod seen;
mod spot;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pool::{SpotPool, DEFAULT_MAX_POOL_SIZE};
pub use seen::SeenSet;
pub use spot::{Cursor, Spot, SpotId};
pub use state::{DeckConfig, DeckState, DEFAULT_BATCH_SIZE};
pub use update::update;
pub use view_model::{DeckViewModel, SpotCardView};

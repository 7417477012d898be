use crate::{DeckState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DeckState, msg: Msg) -> (DeckState, Vec<Effect>) {
    let effects = match msg {
        Msg::DeckOpened => {
            state.reset();
            vec![Effect::FetchPage { cursor: None }]
        }
        Msg::DeckNearEnd => produce_batch(&mut state),
        Msg::PageLoaded { spots, next_cursor } => {
            let fresh = state.ingest_page(spots, next_cursor);
            // First content for an empty deck goes out without waiting for
            // another surface signal. The settle flag serializes this against
            // a concurrently delivered `DeckNearEnd`.
            if fresh > 0 && state.displayed().is_empty() {
                produce_batch(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::SettleElapsed => {
            state.clear_settling();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// One scheduler pass: prefetch when low, draw a shuffled batch if the pool
/// has anything, then re-check the low-water mark.
fn produce_batch(state: &mut DeckState) -> Vec<Effect> {
    if state.is_settling() {
        return Vec::new();
    }

    let batch_size = state.config().batch_size;
    let mut effects = Vec::new();

    // Prefetch hint; batch production never waits for it.
    if state.pool_len() < batch_size && state.can_fetch() {
        effects.push(Effect::FetchPage {
            cursor: state.next_fetch_cursor(),
        });
    }

    if state.pool_len() == 0 {
        // Nothing to show yet; the surface keeps its loading state.
        return effects;
    }

    state.draw_batch();
    effects.push(Effect::ScheduleSettle);

    // Keep the pool replenished ahead of consumption.
    if state.pool_len() < 2 * batch_size && state.can_fetch() {
        effects.push(Effect::FetchPage {
            cursor: state.next_fetch_cursor(),
        });
    }

    effects
}

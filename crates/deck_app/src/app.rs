use std::sync::mpsc;
use std::time::{Duration, Instant};

use deck_core::{update, DeckConfig, DeckState, DeckViewModel, Msg};
use deck_logging::deck_info;

use crate::config::AppConfig;
use crate::effects::EffectRunner;

const SESSION_DEADLINE: Duration = Duration::from_secs(60);

/// Drives one browsing session the way the presentation surface would: open
/// a deck, print each batch as it lands, and signal near-end until the
/// configured number of batches has been shown or the upstream runs dry.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), &config);

    let deck_config = DeckConfig {
        batch_size: config.batch_size,
        max_pool_size: config.max_pool_size,
    };
    let mut state = match config.seed {
        Some(seed) => DeckState::with_seed(deck_config, seed),
        None => DeckState::new(deck_config),
    };

    let target_cards = config.batches * config.batch_size;
    let mut rendered = 0usize;
    let mut last_signal_len = usize::MAX;
    let deadline = Instant::now() + SESSION_DEADLINE;

    let _ = msg_tx.send(Msg::DeckOpened);

    while Instant::now() < deadline {
        let msg = match msg_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(msg) => msg,
            Err(mpsc::RecvTimeoutError::Timeout) => Msg::Tick,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };
        let settle_elapsed = matches!(msg, Msg::SettleElapsed);

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.run(effects);

        if state.consume_dirty() {
            rendered = render_new_cards(&state.view(), rendered);
        }

        let view = state.view();
        if view.cards.len() >= target_cards
            || (view.upstream_exhausted && view.pool_len == 0 && !view.cards.is_empty())
        {
            break;
        }

        // The simulated surface reports near-end once per deck length, and
        // again after a settle so a signal swallowed by the busy flag is not
        // lost.
        if rendered == view.cards.len()
            && (last_signal_len != view.cards.len() || settle_elapsed)
        {
            last_signal_len = view.cards.len();
            let _ = msg_tx.send(Msg::DeckNearEnd);
        }
    }

    deck_info!("Session complete: {} cards shown", rendered);
    Ok(())
}

fn render_new_cards(view: &DeckViewModel, already_rendered: usize) -> usize {
    let stamp = chrono::Local::now().format("%H:%M:%S");
    for card in &view.cards[already_rendered..] {
        println!("[{stamp}] {}  {} ({})", card.id, card.title, card.place_name);
    }
    view.cards.len()
}

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use deck_core::{Cursor, Effect, Msg, Spot, SpotId};
use deck_engine::{EngineEvent, EngineHandle, FetchSettings, SpotRecord};
use deck_logging::{deck_info, deck_warn};

use crate::config::AppConfig;

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    msg_tx: mpsc::Sender<Msg>,
    settle_delay: Duration,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config: &AppConfig) -> Self {
        let settings = FetchSettings {
            page_size: config.page_size,
            ..FetchSettings::default()
        };
        let engine = Arc::new(EngineHandle::new(config.listing_url.clone(), settings));

        let runner = Self {
            engine,
            msg_tx,
            settle_delay: Duration::from_millis(config.settle_ms),
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { cursor } => {
                    deck_info!(
                        "FetchPage cursor={:?}",
                        cursor.as_ref().map(Cursor::as_str)
                    );
                    self.engine
                        .request_page(cursor.map(|c| c.as_str().to_string()));
                }
                Effect::ScheduleSettle => {
                    let tx = self.msg_tx.clone();
                    let delay = self.settle_delay;
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = tx.send(Msg::SettleElapsed);
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::PageLoaded { result } => match result {
                        Ok(page) => {
                            let next_cursor = page.next_cursor.map(Cursor::new);
                            let spots = page.items.into_iter().map(into_spot).collect();
                            let _ = msg_tx.send(Msg::PageLoaded { spots, next_cursor });
                        }
                        Err(err) => {
                            // The core never hears about this; the pool just
                            // stops growing and the next low-water crossing
                            // requests the page again.
                            deck_warn!("Page fetch failed: {}", err);
                        }
                    },
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn into_spot(record: SpotRecord) -> Spot {
    Spot {
        id: SpotId::new(record.id),
        title: record.title,
        image_url: record.image_url,
        lat: record.lat,
        lng: record.lng,
        place_name: record.place_name,
    }
}

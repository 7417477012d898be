use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use deck_logging::deck_debug;

use crate::fetch::{FetchSettings, HttpPageFetcher, PageFetcher};
use crate::EngineEvent;

enum EngineCommand {
    RequestPage { cursor: Option<String> },
}

/// Handle to the fetch engine: a background thread owning a tokio runtime.
///
/// Commands go in over a channel and never block the caller; results come
/// back as [`EngineEvent`]s drained with [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    /// Spawns the engine against the listing service at `base_url`.
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Self {
        Self::with_fetcher(HttpPageFetcher::new(base_url, settings))
    }

    /// Spawns the engine with a custom fetcher (used by tests).
    pub fn with_fetcher<F: PageFetcher + 'static>(fetcher: F) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(fetcher);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    /// Requests the next listing page. Fire-and-forget.
    pub fn request_page(&self, cursor: Option<String>) {
        let _ = self.cmd_tx.send(EngineCommand::RequestPage { cursor });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::RequestPage { cursor } => {
            deck_debug!("fetching listing page cursor={:?}", cursor);
            let result = fetcher.fetch_page(cursor.as_deref()).await;
            let _ = event_tx.send(EngineEvent::PageLoaded { result });
        }
    }
}

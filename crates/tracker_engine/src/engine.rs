use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracker_core::FetchRequest;
use tracker_logging::{tracker_debug, tracker_warn};

use crate::client::ApiClient;
use crate::fetch::ListingFetcher;
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Fetch(FetchRequest),
    LoadStats,
}

/// Runs fetches on a background tokio runtime and hands completions back
/// to the control thread through a channel.
///
/// Requests are never aborted; a superseded one still completes and is
/// reported, and the caller decides whether it is stale.
pub struct EngineHandle<T> {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent<T>>,
}

impl<T: Send + 'static> EngineHandle<T> {
    pub fn new(
        client: Arc<ApiClient>,
        fetcher: Arc<dyn ListingFetcher<T>>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), fetcher.as_ref(), command, event_tx).await;
                });
            }
            tracker_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request: FetchRequest) {
        if self.cmd_tx.send(EngineCommand::Fetch(request)).is_err() {
            tracker_warn!("engine worker is gone; fetch dropped");
        }
    }

    pub fn load_stats(&self) {
        if self.cmd_tx.send(EngineCommand::LoadStats).is_err() {
            tracker_warn!("engine worker is gone; stats request dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent<T>> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent<T>> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command<T>(
    client: &ApiClient,
    fetcher: &dyn ListingFetcher<T>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent<T>>,
) {
    let event = match command {
        EngineCommand::Fetch(request) => {
            tracker_debug!(
                "fetch seq={} page={} term={:?}",
                request.seq,
                request.page,
                request.term
            );
            let outcome = fetcher.fetch(&request).await;
            EngineEvent::FetchCompleted { request, outcome }
        }
        EngineCommand::LoadStats => EngineEvent::StatsLoaded(client.portfolio_stats().await),
    };
    let _ = event_tx.send(event);
}

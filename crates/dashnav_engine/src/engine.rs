use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_info, engine_warn};

use crate::fetch::PartialFetcher;
use crate::outline::outline_partial;
use crate::{EngineEvent, FetchedPartial, RequestId};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        section: String,
        path: String,
    },
}

/// Sends fetch commands to the engine thread. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving end for completed fetches.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts the engine thread with its own tokio runtime.
    ///
    /// Fetches run concurrently; their events arrive in completion order.
    pub fn new(fetcher: Arc<dyn PartialFetcher>) -> std::io::Result<(Self, EngineEvents)> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("dashnav-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("dashnav-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn fetch(&self, request_id: RequestId, section: impl Into<String>, path: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            section: section.into(),
            path: path.into(),
        });
    }
}

impl EngineEvents {
    /// Blocks until the next fetch completes. `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn PartialFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            request_id,
            section,
            path,
        } => {
            let result = fetcher.fetch(&path).await.map(|html| {
                let outline = outline_partial(&html);
                FetchedPartial { html, outline }
            });
            match &result {
                Ok(partial) => engine_info!(
                    "request={} path={} bytes={}",
                    request_id,
                    path,
                    partial.html.len()
                ),
                Err(err) => engine_warn!("request={} path={} failed: {}", request_id, path, err),
            }
            let _ = event_tx.send(EngineEvent::PartialFetched {
                request_id,
                section,
                path,
                result,
            });
        }
    }
}

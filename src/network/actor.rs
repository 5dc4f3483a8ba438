//! Network actor - runs requests on the Tokio runtime

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::hit;

/// Network actor that executes request drafts off the UI thread
pub struct NetworkActor {
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Hit { id, text }) => {
                            let response_tx = self.response_tx.clone();

                            // Every hit builds its own client, so tasks share nothing
                            self.active_requests.spawn(async move {
                                let _ = response_tx.send(run_hit(id, &text).await);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - the response was already sent by the task
                }
            }
        }
    }
}

/// Execute one draft and wrap the outcome for the App layer
pub async fn run_hit(id: u64, text: &str) -> NetworkResponse {
    let start = Instant::now();
    let outcome = hit(text).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(result) => NetworkResponse::Completed {
            id,
            result,
            time_ms,
        },
        Err(e) => {
            tracing::warn!(id, error = %e, "Request failed");
            NetworkResponse::Failed {
                id,
                message: e.to_string(),
                time_ms,
            }
        }
    }
}

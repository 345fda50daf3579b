use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::fetch_generation;
use crate::core::session::GenerateRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateEvent {
    Completed(String),
    Failed(String),
}

pub struct GenerateParams {
    pub client: reqwest::Client,
    pub base_url: String,
    pub request: GenerateRequest,
}

/// Runs each request on its own task and reports back over one channel.
///
/// Results are tagged with the request id they answer. There is no
/// cancellation: a result whose receiver is gone is dropped.
#[derive(Clone)]
pub struct GenerateService {
    tx: mpsc::UnboundedSender<(GenerateEvent, u64)>,
}

impl GenerateService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(GenerateEvent, u64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn spawn_request(&self, params: GenerateParams) -> tokio::task::JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let GenerateParams {
                client,
                base_url,
                request,
            } = params;
            let request_id = request.request_id;

            let event = match fetch_generation(&client, &base_url, &request.query()).await {
                Ok(output) => {
                    debug!(request_id, bytes = output.len(), "generate request completed");
                    GenerateEvent::Completed(output)
                }
                Err(err) => {
                    info!(request_id, error = %err, "generate request failed");
                    GenerateEvent::Failed(err.to_string())
                }
            };

            if tx.send((event, request_id)).is_err() {
                debug!(request_id, "receiver closed; discarding generate result");
            }
        })
    }

    #[cfg(test)]
    pub fn send_for_test(&self, event: GenerateEvent, request_id: u64) {
        let _ = self.tx.send((event, request_id));
    }
}

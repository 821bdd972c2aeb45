//! Lookup worker thread
//!
//! Runs a current-thread tokio runtime on a background thread. Each request is
//! spawned as its own task, so several lookups can be in flight at once and their
//! responses may arrive in any order. Nothing is cancelled: a response is always
//! delivered to the UI thread, which decides what to do with it.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::LookupError;
use super::client::SuggestionSource;
use crate::autocomplete::{QueryDispatcher, Suggestion};
use crate::error::LocpickError;

/// A lookup for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Index of the field that asked
    pub field: usize,
    /// Per-field sequence number, for logging out-of-order arrivals
    pub request_id: u64,
    pub query: String,
}

/// Outcome of a lookup, routed back to the field that asked
#[derive(Debug)]
pub struct LookupResponse {
    pub field: usize,
    pub request_id: u64,
    pub query: String,
    pub outcome: Result<Vec<Suggestion>, LookupError>,
}

/// Sending half of the worker's request channel
#[derive(Debug, Clone)]
pub struct LookupHandle {
    request_tx: UnboundedSender<LookupRequest>,
}

impl LookupHandle {
    /// Queue a request. Returns false if the worker has shut down.
    pub fn send(&self, request: LookupRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }
}

/// Spawn the lookup worker thread
///
/// Returns the handle used to send requests and the receiver the UI loop polls for
/// responses. The worker exits once every handle has been dropped.
pub fn spawn_worker<S: SuggestionSource>(
    source: S,
) -> Result<(LookupHandle, Receiver<LookupResponse>), LocpickError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let source = Arc::new(source);

    std::thread::Builder::new()
        .name("locpick-lookup".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(source, request_rx, response_tx));
        })?;

    Ok((LookupHandle { request_tx }, response_rx))
}

/// Main worker loop - spawns a task per request until the channel is closed
async fn worker_loop<S: SuggestionSource>(
    source: Arc<S>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let source = Arc::clone(&source);
        let response_tx = response_tx.clone();

        tokio::spawn(async move {
            let outcome = source.lookup(request.query.clone()).await;
            let response = LookupResponse {
                field: request.field,
                request_id: request.request_id,
                query: request.query,
                outcome,
            };
            if response_tx.send(response).is_err() {
                log::debug!("UI loop gone, dropping lookup response");
            }
        });
    }

    log::debug!("Lookup worker shutting down");
}

/// Dispatches one field's queries to the worker
#[derive(Debug, Clone)]
pub struct FieldDispatcher {
    field: usize,
    next_request_id: u64,
    handle: LookupHandle,
}

impl FieldDispatcher {
    pub fn new(field: usize, handle: LookupHandle) -> Self {
        Self {
            field,
            next_request_id: 0,
            handle,
        }
    }

    /// Id of the most recently dispatched request, 0 before the first
    pub fn last_request_id(&self) -> u64 {
        self.next_request_id
    }
}

impl QueryDispatcher for FieldDispatcher {
    fn dispatch(&mut self, query: &str) -> bool {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request = LookupRequest {
            field: self.field,
            request_id: self.next_request_id,
            query: query.to_string(),
        };
        let sent = self.handle.send(request);
        if !sent {
            log::warn!("Lookup worker is not running, dropped query {:?}", query);
        }
        sent
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

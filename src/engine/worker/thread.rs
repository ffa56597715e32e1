//! Suggestion worker thread

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use super::types::{SuggestRequest, SuggestResponse};
use crate::cache::SuggestionCache;
use crate::engine::resolve::resolve;

/// Spawn the suggestion worker thread
///
/// The thread resolves requests until the request channel closes. A panic
/// inside the worker is reported to the engine as a request-0 error.
pub fn spawn_worker(
    cache: Arc<SuggestionCache>,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    std::thread::spawn(move || {
        run_guarded(&response_tx, || worker_loop(&cache, request_rx, &response_tx));
    });
}

/// Run `work`, turning a panic into a worker-level error response
///
/// Only this thread's unwinding is caught; the process panic hook is untouched.
fn run_guarded<F: FnOnce()>(response_tx: &Sender<SuggestResponse>, work: F) {
    let result = panic::catch_unwind(AssertUnwindSafe(work));

    if let Err(e) = result {
        let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = e.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        log::error!("Suggestion worker thread panicked: {}", panic_msg);

        // request_id = 0 marks a worker-level error
        let _ = response_tx.send(SuggestResponse::Error {
            message: format!("Suggestion worker crashed: {}", panic_msg),
            request_id: 0,
        });
    }
}

/// Process requests until the channel closes
fn worker_loop(
    cache: &SuggestionCache,
    request_rx: Receiver<SuggestRequest>,
    response_tx: &Sender<SuggestResponse>,
) {
    log::debug!("Suggestion worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received request {}: {}:{}",
            request.request_id,
            request.field,
            request.key
        );
        handle_request(cache, request, response_tx);
    }

    log::debug!("Suggestion worker thread shutting down");
}

fn handle_request(
    cache: &SuggestionCache,
    request: SuggestRequest,
    response_tx: &Sender<SuggestResponse>,
) {
    if request.cancel_token.is_cancelled() {
        let _ = response_tx.send(SuggestResponse::Cancelled {
            request_id: request.request_id,
        });
        return;
    }

    let response = match resolve(cache, &request.lookup(), &request.cancel_token) {
        Some(resolved) => {
            log::debug!(
                "Request {} resolved from {} with {} suggestions",
                request.request_id,
                resolved.source,
                resolved.suggestions.len()
            );
            SuggestResponse::Ready {
                suggestions: resolved.suggestions,
                source: resolved.source,
                request_id: request.request_id,
            }
        }
        None => {
            log::debug!("Request {} was cancelled", request.request_id);
            SuggestResponse::Cancelled {
                request_id: request.request_id,
            }
        }
    };

    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;

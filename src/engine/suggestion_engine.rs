use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use tokio_util::sync::CancellationToken;

use super::commit::{CommitInstruction, plan_commit};
use super::engine_state::{CancelReason, EngineState, SuggestionList};
use super::resolve::ResultSource;
use super::worker::{SuggestRequest, SuggestResponse, spawn_worker};
use crate::cache::SuggestionCache;
use crate::config::SuggestionsConfig;
use crate::error::KetikError;
use crate::pool::CandidatePool;
use crate::suggest::tokens::current_word_range;
use crate::suggest::{ActiveToken, ContextKey, extract_active_token};

/// Autocomplete for one entry field
///
/// Owns a background worker that resolves lookups against the shared cache
/// and the field's pool. Edits issue requests; `poll_response` publishes the
/// answer to the latest one and drops anything older.
pub struct SuggestionEngine {
    field: String,
    cache: Arc<SuggestionCache>,
    pool: CandidatePool,
    settings: SuggestionsConfig,
    state: EngineState,
    list: SuggestionList,
    /// Token under the caret at the last edit
    active: Option<ActiveToken>,
    /// Where the published list came from
    last_source: Option<ResultSource>,
    /// Last worker failure, if any
    last_error: Option<String>,

    /// Channel to send requests to the worker
    request_tx: Option<Sender<SuggestRequest>>,
    /// Channel to receive responses from the worker
    response_rx: Option<Receiver<SuggestResponse>>,
    /// Current request ID counter (starts at 1, 0 reserved for worker errors)
    next_request_id: u64,
    /// ID of the request whose answer may still be published
    in_flight_request_id: Option<u64>,
    /// Cancellation token for the in-flight request
    current_cancel_token: Option<CancellationToken>,
}

impl SuggestionEngine {
    /// Create an engine for `field` and spawn its worker
    pub fn new(
        field: impl Into<String>,
        pool: CandidatePool,
        cache: Arc<SuggestionCache>,
        settings: &SuggestionsConfig,
    ) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        spawn_worker(Arc::clone(&cache), request_rx, response_tx);

        Self {
            field: field.into(),
            cache,
            pool,
            settings: settings.clone(),
            state: EngineState::Idle,
            list: SuggestionList::new(),
            active: None,
            last_source: None,
            last_error: None,
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 1, // Reserve 0 for worker errors
            in_flight_request_id: None,
            current_cancel_token: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.is_enabled_for(&self.field)
    }

    /// Published suggestions (empty while hidden)
    pub fn suggestions(&self) -> &[String] {
        self.list.suggestions()
    }

    pub fn is_visible(&self) -> bool {
        self.list.is_visible()
    }

    pub fn selected(&self) -> Option<&str> {
        self.list.selected()
    }

    pub fn selected_index(&self) -> usize {
        self.list.selected_index()
    }

    pub fn active_token(&self) -> Option<&ActiveToken> {
        self.active.as_ref()
    }

    pub fn last_source(&self) -> Option<ResultSource> {
        self.last_source
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Check if a lookup is awaiting its answer
    pub fn is_pending(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Swap in a refreshed candidate pool; applies from the next edit
    pub fn set_pool(&mut self, pool: CandidatePool) {
        log::debug!("Field {} pool refreshed ({} candidates)", self.field, pool.len());
        self.pool = pool;
    }

    pub fn set_max_results(&mut self, max_results: usize) {
        self.settings.max_results = max_results;
    }

    /// Handle an edit: extract the token before `caret` and issue a lookup
    ///
    /// The answer is published by a later `poll_response`.
    pub fn on_edit(&mut self, text: &str, caret: usize) {
        if !self.is_enabled() {
            self.cancel(CancelReason::Disabled);
            return;
        }

        // Worker gone: no lookup can be answered
        if self.request_tx.is_none() {
            self.cancel(CancelReason::WorkerUnavailable);
            return;
        }

        let Some(token) = extract_active_token(text, caret) else {
            self.cancel(CancelReason::EmptyToken);
            return;
        };

        self.cancel_in_flight();
        self.state = EngineState::Typing;

        let key = ContextKey::build(&token.already_typed, &token.fragment);
        let request_id = self.allocate_request_id();

        log::debug!(
            "Sending suggestion request {} for {}:{}",
            request_id,
            self.field,
            key
        );

        let cancel_token = CancellationToken::new();
        self.current_cancel_token = Some(cancel_token.clone());
        self.in_flight_request_id = Some(request_id);

        let request = SuggestRequest {
            request_id,
            field: self.field.clone(),
            key,
            fragment: token.fragment.clone(),
            already_typed: token.already_typed.clone(),
            pool: self.pool.clone(),
            max_results: self.settings.effective_max_results(),
            broad_lookup: self.settings.broad_lookup,
            cancel_token,
        };
        self.active = Some(token);

        // If send fails, worker died - clear channels
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());
        if !sent {
            self.worker_disconnected();
        }
    }

    /// Drain worker responses (non-blocking)
    ///
    /// Returns true when the published list changed.
    pub fn poll_response(&mut self) -> bool {
        let rx = match self.response_rx.take() {
            Some(rx) => rx,
            None => return false,
        };

        let mut updated = false;
        loop {
            match rx.try_recv() {
                Ok(response) => {
                    updated |= self.process_response(response);
                }
                Err(TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    // Don't put receiver back - it's disconnected
                    self.worker_disconnected();
                    updated = true;
                    break;
                }
            }
        }

        updated
    }

    /// Returns true if the response was published
    fn process_response(&mut self, response: SuggestResponse) -> bool {
        let current_request_id = self.in_flight_request_id;

        match response {
            SuggestResponse::Ready {
                suggestions,
                source,
                request_id,
            } => {
                if Some(request_id) != current_request_id {
                    log::debug!(
                        "Ignoring stale suggestions from request {} (current: {:?})",
                        request_id,
                        current_request_id
                    );
                    return false;
                }

                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.last_source = Some(source);
                self.list.publish(suggestions);
                if !self.list.is_visible() {
                    // Nothing to show
                    self.active = None;
                    self.state = EngineState::Idle;
                }
                true
            }
            SuggestResponse::Error {
                message,
                request_id,
            } => {
                // Worker-level errors (request_id == 0) always apply
                if request_id == 0 || Some(request_id) == current_request_id {
                    log::error!("Suggestion request {} failed: {}", request_id, message);
                    self.in_flight_request_id = None;
                    self.current_cancel_token = None;
                    self.last_error = Some(message);
                    self.list.hide();
                    self.active = None;
                    self.state = EngineState::Idle;
                    return true;
                }
                false
            }
            SuggestResponse::Cancelled { request_id } => {
                if Some(request_id) == current_request_id {
                    self.in_flight_request_id = None;
                    self.current_cancel_token = None;
                }
                false
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.list.is_visible() {
            self.list.select_next();
            self.state = EngineState::Selecting;
        }
    }

    pub fn select_previous(&mut self) {
        if self.list.is_visible() {
            self.list.select_previous();
            self.state = EngineState::Selecting;
        }
    }

    /// Commit the highlighted suggestion
    pub fn commit_selected(&mut self, text: &str, caret: usize) -> Option<CommitInstruction> {
        let chosen = self.list.selected()?.to_string();
        self.commit(text, caret, &chosen)
    }

    /// Replace the typed span with `chosen` and learn the resulting text
    ///
    /// Returns None when no alphanumeric run precedes the caret.
    pub fn commit(&mut self, text: &str, caret: usize, chosen: &str) -> Option<CommitInstruction> {
        let token = current_word_range(text, caret)?;
        let instruction = plan_commit(text, caret, token, chosen);

        self.cancel_in_flight();
        self.list.hide();
        self.active = None;
        self.state = EngineState::Idle;

        let committed = instruction.apply(text);
        let committed = committed.trim();
        if !committed.is_empty() {
            let added = self
                .cache
                .append(&self.field, committed, &[committed.to_string()]);
            log::debug!(
                "Committed '{}' in {} ({} continuations learned)",
                committed,
                self.field,
                added
            );
        }

        Some(instruction)
    }

    /// Dismiss suggestions without learning anything
    pub fn cancel(&mut self, reason: CancelReason) {
        log::debug!("Suggestions for {} cancelled: {:?}", self.field, reason);
        self.cancel_in_flight();
        self.list.hide();
        self.active = None;
        self.state = EngineState::Idle;
    }

    /// Cancel in-flight request if any
    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.current_cancel_token.take() {
            token.cancel();
            log::debug!("Cancelled request {:?}", self.in_flight_request_id);
        }
        self.in_flight_request_id = None;
    }

    fn allocate_request_id(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker errors)
        if self.next_request_id == 0 {
            self.next_request_id = 1;
        }
        request_id
    }

    fn worker_disconnected(&mut self) {
        let err = KetikError::WorkerDisconnected;
        log::error!("{} ({})", err, self.field);
        self.request_tx = None;
        self.response_rx = None;
        self.in_flight_request_id = None;
        self.current_cancel_token = None;
        self.last_error = Some(err.to_string());
        self.list.hide();
        self.active = None;
        self.state = EngineState::Idle;
    }
}

#[cfg(test)]
#[path = "suggestion_engine_tests.rs"]
mod suggestion_engine_tests;

//! Suggestion worker types

use tokio_util::sync::CancellationToken;

use crate::engine::resolve::{Lookup, ResultSource};
use crate::pool::CandidatePool;
use crate::suggest::ContextKey;

/// Request to resolve suggestions for one edit
#[derive(Debug)]
pub struct SuggestRequest {
    /// Unique ID for tracking this request (0 is reserved)
    pub request_id: u64,
    /// Cache namespace
    pub field: String,
    pub key: ContextKey,
    pub fragment: String,
    pub already_typed: Vec<String>,
    /// Snapshot of the field's candidates at request time
    pub pool: CandidatePool,
    pub max_results: usize,
    pub broad_lookup: bool,
    /// Token for cancelling this request
    pub cancel_token: CancellationToken,
}

impl SuggestRequest {
    pub fn lookup(&self) -> Lookup<'_> {
        Lookup {
            field: &self.field,
            key: &self.key,
            fragment: &self.fragment,
            already_typed: &self.already_typed,
            pool: self.pool.as_slice(),
            max_results: self.max_results,
            broad_lookup: self.broad_lookup,
        }
    }
}

/// Response from the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestResponse {
    /// Lookup finished
    Ready {
        suggestions: Vec<String>,
        source: ResultSource,
        request_id: u64,
    },
    /// Lookup was cancelled before it finished
    Cancelled { request_id: u64 },
    /// Worker failure
    /// Note: request_id = 0 indicates a worker-level error (applies immediately)
    Error { message: String, request_id: u64 },
}

impl SuggestResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SuggestResponse::Ready { request_id, .. }
            | SuggestResponse::Cancelled { request_id }
            | SuggestResponse::Error { request_id, .. } => *request_id,
        }
    }
}

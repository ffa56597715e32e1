//! Suggestion worker
//!
//! Resolves lookups on a background thread so the editing thread never
//! waits on a search. Requests arrive over a std::sync::mpsc channel, each
//! tagged with a request id and a cancellation token; responses go back
//! over a second channel and are drained by the engine's `poll_response`.
//!
//! The worker shares the engine's `Arc<SuggestionCache>`: a miss is searched
//! and stored from this thread.

pub mod thread;
pub mod types;

pub use thread::spawn_worker;
pub use types::{SuggestRequest, SuggestResponse};

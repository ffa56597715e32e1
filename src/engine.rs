//! Suggestion engine: the per-field state machine and its worker
//!
//! ```ignore
//! let cache = SuggestionCache::shared();
//! let mut engine = SuggestionEngine::new("nama", pool, cache, &config.suggestions);
//!
//! engine.on_edit("Budi S", 6);
//! // later, from the host's event loop
//! if engine.poll_response() {
//!     render(engine.suggestions());
//! }
//! ```

pub mod commit;
pub mod engine_state;
pub mod resolve;
mod suggestion_engine;
pub mod worker;

pub use commit::{CommitInstruction, plan_commit};
pub use engine_state::{CancelReason, EngineState, SuggestionList};
pub use resolve::{Lookup, Resolved, ResultSource, resolve};
pub use suggestion_engine::SuggestionEngine;

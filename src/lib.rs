//! ketik library - Context-aware autocomplete for free-text entry fields
//!
//! Ranks previously committed values of a field against the word being
//! typed, caches the ranking per typing context and learns from new commits.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod pool;
pub mod shard;
pub mod suggest;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use cache::SuggestionCache;
pub use config::Config;
pub use engine::{CancelReason, CommitInstruction, EngineState, SuggestionEngine};
pub use error::KetikError;
pub use pool::CandidatePool;

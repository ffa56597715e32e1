//! Context-aware suggestion cache shared by every engine of the host

pub mod suggestion_cache;

pub use suggestion_cache::{CacheEntry, SuggestionCache};

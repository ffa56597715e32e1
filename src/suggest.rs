//! Matching and ranking: token extraction, scoring, parallel search, keys

pub mod context_key;
pub mod normalize;
pub mod scorer;
pub mod search;
pub mod tokens;

pub use context_key::ContextKey;
pub use normalize::capitalize_words;
pub use scorer::{MatchScore, evaluate, score};
pub use search::{DEFAULT_MAX_RESULTS, SearchRequest, search};
pub use tokens::{ActiveToken, TokenRange, extract_active_token};

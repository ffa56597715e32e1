//! Shared test utilities for ketik
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crate::cache::SuggestionCache;
    use crate::config::SuggestionsConfig;
    use crate::engine::SuggestionEngine;
    use crate::pool::CandidatePool;

    /// Student names used across engine tests
    pub const TEST_NAMES: [&str; 3] = ["Budi Santoso", "Budi Setiawan", "Ahmad Budi"];

    pub fn names_pool() -> CandidatePool {
        CandidatePool::new(TEST_NAMES)
    }

    /// Engine for the "nama" field with default settings and its own cache
    pub fn test_engine() -> SuggestionEngine {
        engine_with(SuggestionsConfig::default(), SuggestionCache::shared())
    }

    pub fn engine_with(settings: SuggestionsConfig, cache: Arc<SuggestionCache>) -> SuggestionEngine {
        SuggestionEngine::new("nama", names_pool(), cache, &settings)
    }

    /// Poll until the in-flight lookup is answered or the timeout passes
    pub fn wait_for_response(engine: &mut SuggestionEngine, timeout_secs: u64) -> bool {
        let start = Instant::now();
        while engine.is_pending() && start.elapsed() < Duration::from_secs(timeout_secs) {
            let _ = engine.poll_response();
            std::thread::sleep(Duration::from_millis(10));
        }
        !engine.is_pending()
    }

    /// Type `text` with the caret at its end and wait for the answer
    pub fn type_and_wait(engine: &mut SuggestionEngine, text: &str) {
        engine.on_edit(text, text.chars().count());
        assert!(wait_for_response(engine, 2), "no response for {:?}", text);
    }
}

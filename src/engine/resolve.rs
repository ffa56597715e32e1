//! Cache-then-search resolution of one lookup
//!
//! Shared by the worker thread and the command-line host so both resolve a
//! fragment the same way: a cache hit is returned as stored, a miss runs the
//! parallel search and stores its result under the key.

use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::cache::SuggestionCache;
use crate::suggest::{ContextKey, SearchRequest, search};

/// Where a resolved list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Cache,
    Search,
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSource::Cache => write!(f, "cache"),
            ResultSource::Search => write!(f, "search"),
        }
    }
}

/// One lookup against a field's cache and pool
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    pub field: &'a str,
    pub key: &'a ContextKey,
    pub fragment: &'a str,
    pub already_typed: &'a [String],
    pub pool: &'a [String],
    pub max_results: usize,
    /// Scan keys by substring instead of exact match
    pub broad_lookup: bool,
}

/// Outcome of a completed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub suggestions: Vec<String>,
    pub source: ResultSource,
}

/// Resolve `lookup`, returning None if `cancel_token` fires first
///
/// Cancellation is checked before the search and again before the result is
/// stored, so a superseded lookup never writes to the cache.
pub fn resolve(
    cache: &SuggestionCache,
    lookup: &Lookup<'_>,
    cancel_token: &CancellationToken,
) -> Option<Resolved> {
    if let Some(cached) = cached_suggestions(cache, lookup) {
        log::debug!(
            "Cache hit for {}:{} ({} suggestions)",
            lookup.field,
            lookup.key,
            cached.len()
        );
        return Some(Resolved {
            suggestions: cached,
            source: ResultSource::Cache,
        });
    }

    if cancel_token.is_cancelled() {
        return None;
    }

    let request = SearchRequest::new(lookup.fragment, lookup.already_typed)
        .with_max_results(lookup.max_results);
    let suggestions = search(lookup.pool, &request);

    if cancel_token.is_cancelled() {
        log::debug!("Lookup {}:{} cancelled after search", lookup.field, lookup.key);
        return None;
    }

    cache.store(lookup.field, lookup.key, suggestions.clone());

    Some(Resolved {
        suggestions,
        source: ResultSource::Search,
    })
}

fn cached_suggestions(cache: &SuggestionCache, lookup: &Lookup<'_>) -> Option<Vec<String>> {
    if lookup.broad_lookup {
        cache.scan(lookup.field, lookup.key.as_str())
    } else {
        cache
            .get(lookup.field, lookup.key)
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.to_vec())
    }
}

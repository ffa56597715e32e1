//! Parallel candidate search
//!
//! The pool is cut into contiguous shards (see [`crate::shard`]) and each
//! shard is scored on the rayon pool. Shards only read their slice of the
//! pool; merging, dedup, ordering and truncation happen after all of them
//! finish, so the output doesn't depend on scheduling.

use std::collections::BTreeSet;

use memchr::memmem;
use rayon::prelude::*;

use super::scorer::evaluate;
use crate::shard::{available_parallelism, shard_ranges};

/// Default number of suggestions returned
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// One search over a candidate pool
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub fragment: &'a str,
    pub already_typed: &'a [String],
    pub max_results: usize,
}

impl<'a> SearchRequest<'a> {
    pub fn new(fragment: &'a str, already_typed: &'a [String]) -> Self {
        Self {
            fragment,
            already_typed,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Search `pool` using one shard per available CPU pair
pub fn search(pool: &[String], request: &SearchRequest<'_>) -> Vec<String> {
    search_with_parallelism(pool, request, available_parallelism())
}

/// Search with an explicit parallelism figure (shard plan is derived from it)
pub fn search_with_parallelism(
    pool: &[String],
    request: &SearchRequest<'_>,
    parallelism: usize,
) -> Vec<String> {
    if pool.is_empty() || request.fragment.is_empty() || request.max_results == 0 {
        return Vec::new();
    }

    let fragment_lower = request.fragment.to_lowercase();
    let ranges = shard_ranges(pool.len(), parallelism);

    log::debug!(
        "Searching {} candidates for '{}' in {} shards",
        pool.len(),
        request.fragment,
        ranges.len()
    );

    let shard_results: Vec<Vec<String>> = ranges
        .into_par_iter()
        .map(|range| score_shard(&pool[range], &fragment_lower, request))
        .collect();

    let merged: BTreeSet<String> = shard_results.into_iter().flatten().collect();
    merged.into_iter().take(request.max_results).collect()
}

/// Score one shard. Pure: reads only its slice and the request.
fn score_shard(shard: &[String], fragment_lower: &str, request: &SearchRequest<'_>) -> Vec<String> {
    let finder = memmem::Finder::new(fragment_lower.as_bytes());

    shard
        .iter()
        .filter(|candidate| {
            finder
                .find(candidate.to_lowercase().as_bytes())
                .is_some()
        })
        .filter_map(|candidate| evaluate(candidate, request.fragment, request.already_typed))
        .collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

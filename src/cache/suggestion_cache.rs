//! Two-level suggestion cache
//!
//! Layout is `field -> context key -> suggestions`. Entries are immutable
//! `Arc<[String]>` slices: a write builds a new slice and swaps it in under
//! the write lock, so readers always see a whole entry. Writers are
//! serialized by the lock; readers only contend with writers.
//!
//! There is no eviction. The cache grows with every distinct context typed
//! until [`SuggestionCache::clear`] is called.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::shard::{available_parallelism, shard_ranges};
use crate::suggest::context_key::{ContextKey, KEY_SEPARATOR};
use crate::suggest::normalize::capitalize_words;

/// Suggestions stored under one context key
pub type CacheEntry = Arc<[String]>;

type FieldEntries = HashMap<ContextKey, CacheEntry>;

/// Shared suggestion cache for all fields
#[derive(Debug, Default)]
pub struct SuggestionCache {
    fields: RwLock<HashMap<String, FieldEntries>>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for sharing between engines
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Exact lookup. A miss is not an error.
    pub fn get(&self, field: &str, key: &ContextKey) -> Option<CacheEntry> {
        self.fields.read().get(field)?.get(key).cloned()
    }

    /// Broad lookup over every key of `field` containing `filter`
    ///
    /// Suggestions of all accepted keys are merged, deduplicated and sorted.
    /// Because acceptance is substring containment, unrelated contexts can
    /// contribute (filter `"am"` accepts key `"programming|s"`).
    pub fn scan(&self, field: &str, filter: &str) -> Option<Vec<String>> {
        self.scan_with_parallelism(field, filter, available_parallelism())
    }

    pub fn scan_with_parallelism(
        &self,
        field: &str,
        filter: &str,
        parallelism: usize,
    ) -> Option<Vec<String>> {
        let filter = filter.trim().to_lowercase();

        // Snapshot under the read lock; the scan itself runs unlocked
        let snapshot: Vec<(ContextKey, CacheEntry)> = {
            let fields = self.fields.read();
            let entries = fields.get(field)?;
            entries
                .iter()
                .map(|(key, entry)| (key.clone(), Arc::clone(entry)))
                .collect()
        };

        let ranges = shard_ranges(snapshot.len(), parallelism);
        let shard_results: Vec<Vec<String>> = ranges
            .into_par_iter()
            .map(|range| {
                snapshot[range]
                    .iter()
                    .filter(|(key, _)| key.as_str().contains(filter.as_str()))
                    .flat_map(|(_, entry)| entry.iter().cloned())
                    .collect()
            })
            .collect();

        let merged: BTreeSet<String> = shard_results.into_iter().flatten().collect();
        if merged.is_empty() {
            None
        } else {
            Some(merged.into_iter().collect())
        }
    }

    /// Overwrite the entry for `(field, key)`
    pub fn store(&self, field: &str, key: &ContextKey, suggestions: Vec<String>) {
        log::debug!(
            "Storing {} suggestions for {}:{}",
            suggestions.len(),
            field,
            key
        );
        self.fields
            .write()
            .entry(field.to_string())
            .or_default()
            .insert(key.clone(), suggestions.into());
    }

    /// Fold a committed value into entries that already exist
    ///
    /// For token `i` of the committed text the key is
    /// `tokens[..i].join(" ") | tokens[i]`. When that key holds a non-empty
    /// entry, each learned suggestion has its first `len(left) + 1`
    /// characters dropped (nothing for `i == 0`) and the continuation is
    /// appended if new. Missing keys are never created. Returns the number
    /// of continuations added.
    pub fn append(&self, field: &str, committed: &str, learned: &[String]) -> usize {
        let lowered = committed.trim().to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| c.is_whitespace() || c == KEY_SEPARATOR)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() || learned.is_empty() {
            return 0;
        }

        let mut fields = self.fields.write();
        let Some(entries) = fields.get_mut(field) else {
            return 0;
        };

        let mut added = 0;
        for (i, token) in tokens.iter().enumerate() {
            let left = tokens[..i].join(" ");
            let key = ContextKey::from_parts(&left, token);

            let Some(existing) = entries.get(&key).filter(|entry| !entry.is_empty()) else {
                continue;
            };

            let drop_count = if i == 0 { 0 } else { left.chars().count() + 1 };
            let mut updated: Vec<String> = existing.to_vec();
            for suggestion in learned {
                let continuation = drop_chars(suggestion, drop_count);
                if continuation.is_empty()
                    || continuation.to_lowercase() == *token
                    || updated.contains(&continuation)
                {
                    continue;
                }
                updated.push(continuation);
            }

            let new_count = updated.len() - existing.len();
            if new_count > 0 {
                log::debug!("Learned {} continuations for {}:{}", new_count, field, key);
                added += new_count;
                entries.insert(key, updated.into());
            }
        }

        added
    }

    /// Normalize a committed value and learn it as its own continuation
    pub fn learn_committed(&self, field: &str, value: &str) -> usize {
        let normalized = capitalize_words(value);
        if normalized.is_empty() {
            return 0;
        }
        self.append(field, &normalized, std::slice::from_ref(&normalized))
    }

    /// Learn every non-empty value of a saved record
    pub fn learn_committed_values<'a, I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        values
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(field, value)| self.learn_committed(field, value))
            .sum()
    }

    /// Drop every field
    pub fn clear(&self) {
        log::debug!("Clearing suggestion cache");
        self.fields.write().clear();
    }

    /// Drop one field's namespace
    pub fn clear_field(&self, field: &str) {
        self.fields.write().remove(field);
    }

    /// Number of fields with at least one entry
    pub fn field_count(&self) -> usize {
        self.fields.read().len()
    }

    /// Number of context keys stored for `field`
    pub fn entry_count(&self, field: &str) -> usize {
        self.fields.read().get(field).map_or(0, HashMap::len)
    }
}

/// Remove the first `count` characters, leaving values not longer than
/// `count` as they are
fn drop_chars(value: &str, count: usize) -> String {
    if count > 0 && value.chars().count() > count {
        value.chars().skip(count).collect()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "suggestion_cache_tests.rs"]
mod suggestion_cache_tests;

//! Shard planning for fan-out work
//!
//! Candidate scoring and broad cache scans both split their input into
//! contiguous shards and hand each shard to rayon. The plan is fixed so that
//! merged output stays deterministic: `min(items, 2 × parallelism)` shards,
//! each `items / shards` long, with the last shard absorbing the remainder.

use std::ops::Range;
use std::thread;

/// Number of logical CPUs, falling back to 1 when the platform can't say
pub fn available_parallelism() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Number of shards for `item_count` items on `parallelism` CPUs
pub fn shard_count(item_count: usize, parallelism: usize) -> usize {
    item_count.min(parallelism.max(1) * 2)
}

/// Contiguous index ranges covering `0..item_count`
///
/// Returns an empty plan for zero items.
pub fn shard_ranges(item_count: usize, parallelism: usize) -> Vec<Range<usize>> {
    let shards = shard_count(item_count, parallelism);
    if shards == 0 {
        return Vec::new();
    }

    let chunk_size = (item_count / shards).max(1);
    (0..shards)
        .filter_map(|i| {
            let start = i * chunk_size;
            let end = if i == shards - 1 {
                item_count
            } else {
                (start + chunk_size).min(item_count)
            };
            (start < end).then_some(start..end)
        })
        .collect()
}

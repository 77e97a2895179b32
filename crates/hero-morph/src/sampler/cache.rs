//! Memoized target clouds keyed by word list.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    words: Vec<String>,
    count: usize,
}

/// Rasterizing text is the most expensive setup step, so each distinct word
/// list (and particle count) is sampled once and reused afterwards.
#[derive(Debug, Default)]
pub struct TargetCache {
    entries: HashMap<CacheKey, Vec<f32>>,
    hits: u64,
    misses: u64,
}

impl TargetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached cloud for `words`, running `sample` only on a miss.
    pub fn get_or_sample<F>(&mut self, words: &[String], count: usize, sample: F) -> &[f32]
    where
        F: FnOnce() -> Vec<f32>,
    {
        let key = CacheKey {
            words: words.to_vec(),
            count,
        };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                debug!(words = ?words, "target cloud cache hit");
                entry.into_mut().as_slice()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                entry.insert(sample()).as_slice()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn samples_once_per_word_list() {
        let mut cache = TargetCache::new();
        let mut calls = 0;
        let w = words(&["HELLO", "WORLD"]);

        let first = cache
            .get_or_sample(&w, 2, || {
                calls += 1;
                vec![1.0; 6]
            })
            .to_vec();
        let second = cache
            .get_or_sample(&w, 2, || {
                calls += 1;
                vec![2.0; 6]
            })
            .to_vec();

        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn word_order_and_count_are_part_of_the_key() {
        let mut cache = TargetCache::new();
        cache.get_or_sample(&words(&["A", "B"]), 1, || vec![0.0; 3]);
        cache.get_or_sample(&words(&["B", "A"]), 1, || vec![0.0; 3]);
        cache.get_or_sample(&words(&["A", "B"]), 2, || vec![0.0; 6]);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn clear_forgets_entries() {
        let mut cache = TargetCache::new();
        cache.get_or_sample(&words(&["A"]), 1, || vec![0.0; 3]);
        cache.clear();
        assert!(cache.is_empty());
    }
}

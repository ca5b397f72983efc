//! Bulk normalization with an exact-input cache.
//!
//! Offense descriptions repeat heavily in court extracts. `BatchNormalizer`
//! normalizes each distinct raw string once and hands the cached result back
//! for every repeat, keeping one output per input row so results line up with
//! the original dataset.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::engine::OffenseNormalizer;

/// Counters for a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Rows seen, including missing ones.
    pub total: usize,
    /// Distinct present inputs that were actually normalized.
    pub unique: usize,
    /// Rows answered from the cache.
    pub cache_hits: usize,
}

/// Caches canonical text by exact raw input.
///
/// The cache only grows; create a new batch normalizer per dataset.
pub struct BatchNormalizer<'n, N: OffenseNormalizer + ?Sized> {
    normalizer: &'n N,
    cache: HashMap<String, String>,
    stats: BatchStats,
}

impl<'n, N: OffenseNormalizer + ?Sized> BatchNormalizer<'n, N> {
    pub fn new(normalizer: &'n N) -> Self {
        Self {
            normalizer,
            cache: HashMap::new(),
            stats: BatchStats::default(),
        }
    }

    /// Normalizes one row, consulting the cache first.
    pub fn normalize(&mut self, text: Option<&str>) -> String {
        self.stats.total += 1;
        let Some(text) = text else {
            return self.normalizer.normalize(None);
        };
        if let Some(hit) = self.cache.get(text) {
            self.stats.cache_hits += 1;
            return hit.clone();
        }
        let canonical = self.normalizer.normalize(Some(text));
        self.cache.insert(text.to_string(), canonical.clone());
        self.stats.unique += 1;
        canonical
    }

    /// Normalizes every row, returning outputs in input order.
    pub fn normalize_batch<'a, I>(&mut self, inputs: I) -> Vec<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let outputs: Vec<String> = inputs.into_iter().map(|text| self.normalize(text)).collect();
        debug!(
            "Batch normalized {} rows ({} unique, {} cache hits).",
            self.stats.total, self.stats.unique, self.stats.cache_hits
        );
        outputs
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    /// Distinct inputs held in the cache.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

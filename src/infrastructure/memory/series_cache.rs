//! In-Memory Series Cache

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{SeriesCacheKey, SeriesCachePort, SeriesCacheStats, SeriesItemsRef};

/// 默认最大条目数
pub const DEFAULT_MAX_ENTRIES: usize = 4096;

/// 内存 series 缓存
///
/// 达到容量上限时先淘汰旧 generation 的条目，仍然满则整体清空
pub struct InMemorySeriesCache {
    entries: DashMap<SeriesCacheKey, SeriesItemsRef>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl InMemorySeriesCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn make_room(&self, generation: u64) {
        if self.entries.len() < self.max_entries {
            return;
        }
        self.entries.retain(|k, _| k.generation >= generation);
        if self.entries.len() >= self.max_entries {
            tracing::debug!(max_entries = self.max_entries, "Series cache full, clearing");
            self.entries.clear();
        }
    }
}

impl Default for InMemorySeriesCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl SeriesCachePort for InMemorySeriesCache {
    fn get(&self, key: &SeriesCacheKey) -> Option<SeriesItemsRef> {
        match self.entries.get(key) {
            Some(items) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(items.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn insert(&self, key: SeriesCacheKey, items: SeriesItemsRef) {
        self.make_room(key.generation);
        self.entries.insert(key, items);
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn stats(&self) -> SeriesCacheStats {
        SeriesCacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

//! Series Cache Port - 解析结果缓存抽象
//!
//! 解析结果只依赖（快照、路由路径、是否首页），因此可以按这三者缓存

use std::sync::Arc;

use crate::domain::series::ResolvedSeriesItem;

/// 解析结果的共享引用
pub type SeriesItemsRef = Arc<Vec<ResolvedSeriesItem>>;

/// 缓存 key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesCacheKey {
    pub generation: u64,
    pub route_path: String,
    pub home: bool,
}

impl SeriesCacheKey {
    pub fn new(generation: u64, route_path: impl Into<String>, home: bool) -> Self {
        Self {
            generation,
            route_path: route_path.into(),
            home,
        }
    }
}

/// 缓存统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesCacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Series Cache Port
pub trait SeriesCachePort: Send + Sync {
    fn get(&self, key: &SeriesCacheKey) -> Option<SeriesItemsRef>;

    fn insert(&self, key: SeriesCacheKey, items: SeriesItemsRef);

    /// 清空所有条目
    fn clear(&self);

    fn stats(&self) -> SeriesCacheStats;
}

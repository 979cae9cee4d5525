//! In-Memory Implementations
//!
//! 站点快照与解析结果缓存的内存实现

mod series_cache;
mod site_store;

pub use series_cache::{InMemorySeriesCache, DEFAULT_MAX_ENTRIES};
pub use site_store::InMemorySiteStore;

//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::series::{PageFrontmatter, ResolvedSeriesItem};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Series DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ResolveSeriesRequest {
    pub path: String,
    #[serde(default)]
    pub frontmatter: PageFrontmatter,
}

#[derive(Debug, Serialize)]
pub struct SeriesItemsResponse {
    pub path: String,
    pub generation: u64,
    pub cached: bool,
    pub items: Vec<ResolvedSeriesItem>,
}

#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub enabled: bool,
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

// ============================================================================
// Site DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReloadSiteResponse {
    pub generation: u64,
    pub pages: usize,
    pub auto_series_keys: Vec<String>,
}

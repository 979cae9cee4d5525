//! Series HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ApplicationError, ResolveSeriesItems};
use crate::infrastructure::http::dto::{
    ApiResponse, CacheStatsResponse, ResolveSeriesRequest, SeriesItemsResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 为页面解析 series 项
pub async fn resolve_series(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResolveSeriesRequest>,
) -> Result<Json<ApiResponse<SeriesItemsResponse>>, ApiError> {
    let response = state.resolve_series_handler.handle(ResolveSeriesItems {
        path: req.path,
        frontmatter: req.frontmatter,
    })?;

    let items = response
        .context
        .child()
        .use_series_items()
        .map_err(ApplicationError::from)?;

    Ok(Json(ApiResponse::success(SeriesItemsResponse {
        path: response.path,
        generation: response.generation,
        cached: response.cached,
        items: items.as_ref().clone(),
    })))
}

/// 缓存统计
pub async fn series_cache_stats(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<CacheStatsResponse>> {
    let response = match &state.series_cache {
        Some(cache) => {
            let stats = cache.stats();
            CacheStatsResponse {
                enabled: true,
                entries: stats.entries,
                hits: stats.hits,
                misses: stats.misses,
            }
        }
        None => CacheStatsResponse {
            enabled: false,
            entries: 0,
            hits: 0,
            misses: 0,
        },
    };
    Json(ApiResponse::success(response))
}

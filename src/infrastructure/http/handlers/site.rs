//! Site HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ReloadSite;
use crate::infrastructure::http::dto::{ApiResponse, ReloadSiteResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 重新加载主题数据与文档内容
pub async fn reload_site(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ReloadSiteResponse>>, ApiError> {
    let result = state.reload_site_handler.handle(ReloadSite).await?;

    Ok(Json(ApiResponse::success(ReloadSiteResponse {
        generation: result.generation,
        pages: result.pages,
        auto_series_keys: result.auto_series_keys,
    })))
}

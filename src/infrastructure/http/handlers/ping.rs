//! Ping Handler
//!
//! 健康检查，同时报告当前站点快照的版本

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub site_generation: u64,
    pub pages: usize,
}

pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let snapshot = state.site_store.current();
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        site_generation: snapshot.generation,
        pages: snapshot.pages.len(),
    })
}

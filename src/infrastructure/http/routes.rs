//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping               GET   健康检查
//! - /api/series/resolve     POST  为页面解析 series 项
//! - /api/series/cache       GET   解析缓存统计
//! - /api/site/reload        POST  重新加载主题与文档内容

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/series", series_routes())
        .nest("/site", site_routes())
}

/// Series 路由
fn series_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resolve", post(handlers::resolve_series))
        .route("/cache", get(handlers::series_cache_stats))
}

/// Site 路由
fn site_routes() -> Router<Arc<AppState>> {
    Router::new().route("/reload", post(handlers::reload_site))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::application::ReloadSite;
    use crate::infrastructure::http::server::build_router;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::{
        FileThemeSource, FsContentSource, InMemorySeriesCache, InMemorySiteStore,
        PrefixLocaleResolver, RouteTableLinkBuilderFactory,
    };

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    async fn site(theme: &str) -> (TempDir, Arc<AppState>) {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "theme.toml", theme);
        write(dir.path(), "docs/README.md", "---\nhome: true\n---\n");
        write(dir.path(), "docs/guide/README.md", "# Guide\n");
        write(dir.path(), "docs/guide/intro.md", "# Introduction\n");
        write(dir.path(), "docs/guide/advanced/plugins.md", "# Plugins\n");

        let state = Arc::new(AppState::new(
            Arc::new(FileThemeSource::new(dir.path().join("theme.toml"))),
            Arc::new(FsContentSource::new(dir.path().join("docs"))),
            Arc::new(InMemorySiteStore::new()),
            Arc::new(RouteTableLinkBuilderFactory),
            Arc::new(PrefixLocaleResolver::new()),
            Some(Arc::new(InMemorySeriesCache::default())),
        ));
        state.reload_site_handler.handle(ReloadSite).await.unwrap();
        (dir, state)
    }

    async fn call(state: Arc<AppState>, method: Method, uri: &str, body: Option<Value>) -> Value {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = build_router(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_explicit_series() {
        let (_dir, state) = site(
            r#"
[series]
"/guide/" = ["intro", { text = "Advanced", collapsible = true, children = ["advanced/plugins"] }]
"#,
        )
        .await;

        let body = call(
            state,
            Method::POST,
            "/api/series/resolve",
            Some(json!({ "path": "/guide/intro.html" })),
        )
        .await;

        assert_eq!(body["errno"], 0);
        assert_eq!(
            body["data"]["items"],
            json!([
                { "text": "Introduction", "link": "/guide/intro.html" },
                {
                    "text": "Advanced",
                    "collapsible": true,
                    "children": [{ "text": "Plugins", "link": "/guide/advanced/plugins.html" }]
                }
            ])
        );
    }

    #[tokio::test]
    async fn test_nested_group_children_survive_reload() {
        let (_dir, state) = site(
            r#"
[series]
"/guide/" = [{ text = "G", icon = "book", children = ["intro", { text = "Sub", children = ["x"] }] }]
"#,
        )
        .await;

        let body = call(
            state,
            Method::POST,
            "/api/series/resolve",
            Some(json!({ "path": "/guide/intro.html" })),
        )
        .await;

        assert_eq!(body["errno"], 0);
        assert_eq!(
            body["data"]["items"],
            json!([{
                "text": "G",
                "icon": "book",
                "children": [
                    { "text": "Introduction", "link": "/guide/intro.html" },
                    { "text": "Sub", "children": ["x"] }
                ]
            }])
        );
    }

    #[tokio::test]
    async fn test_resolve_auto_series() {
        let (_dir, state) = site("autoSetSeries = true\n").await;

        let body = call(
            state,
            Method::POST,
            "/api/series/resolve",
            Some(json!({ "path": "/guide/" })),
        )
        .await;

        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], json!({ "text": "Guide", "link": "/guide/" }));
        assert_eq!(items[1]["link"], "/guide/intro.html");
        assert_eq!(items[2]["text"], "advanced");
    }

    #[tokio::test]
    async fn test_home_page_gets_no_series() {
        let (_dir, state) = site("autoSetSeries = true\n").await;

        let body = call(
            state,
            Method::POST,
            "/api/series/resolve",
            Some(json!({ "path": "/guide/", "frontmatter": { "home": true } })),
        )
        .await;

        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_invalid_path_reports_errno() {
        let (_dir, state) = site("").await;

        let body = call(
            state,
            Method::POST,
            "/api/series/resolve",
            Some(json!({ "path": "guide" })),
        )
        .await;

        assert_eq!(body["errno"], 400);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_second_resolve_is_cached_until_reload() {
        let (_dir, state) = site("autoSetSeries = true\n").await;
        let request = json!({ "path": "/guide/intro.html" });

        let first = call(state.clone(), Method::POST, "/api/series/resolve", Some(request.clone())).await;
        let second = call(state.clone(), Method::POST, "/api/series/resolve", Some(request.clone())).await;
        assert_eq!(first["data"]["cached"], false);
        assert_eq!(second["data"]["cached"], true);

        let reload = call(state.clone(), Method::POST, "/api/site/reload", None).await;
        assert_eq!(reload["data"]["generation"], 2);
        assert_eq!(reload["data"]["pages"], 4);

        let third = call(state.clone(), Method::POST, "/api/series/resolve", Some(request)).await;
        assert_eq!(third["data"]["cached"], false);
        assert_eq!(third["data"]["generation"], 2);

        let stats = call(state, Method::GET, "/api/series/cache", None).await;
        assert_eq!(stats["data"]["enabled"], true);
        assert_eq!(stats["data"]["entries"], 1);
    }

    #[tokio::test]
    async fn test_ping_reports_site_generation() {
        let (_dir, state) = site("").await;
        let body = call(state, Method::GET, "/api/ping", None).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["site_generation"], 1);
        assert_eq!(body["pages"], 4);
    }
}

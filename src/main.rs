//! Reco Series - 文档站点侧边栏 series 解析服务
//!
//! 启动流程: 加载配置 -> 装配适配器 -> 首次加载站点 -> 启动 HTTP 服务

use std::sync::Arc;

use reco_series::application::ports::SeriesCachePort;
use reco_series::application::ReloadSite;
use reco_series::config::{load_config, print_config};
use reco_series::infrastructure::http::{AppState, HttpServer, ServerConfig};
use reco_series::infrastructure::{
    FileThemeSource, FsContentSource, InMemorySeriesCache, InMemorySiteStore,
    PrefixLocaleResolver, RouteTableLinkBuilderFactory,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},reco_series={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Reco Series - series 解析服务");
    print_config(&config);

    // 创建适配器
    let theme_source = Arc::new(FileThemeSource::new(config.theme.path.clone()));
    let content_source = Arc::new(FsContentSource::new(config.content.docs_dir.clone()));
    let site_store = Arc::new(InMemorySiteStore::new());
    let link_builders = Arc::new(RouteTableLinkBuilderFactory);
    let locale_resolver = Arc::new(PrefixLocaleResolver::new());

    let series_cache: Option<Arc<dyn SeriesCachePort>> = if config.cache.enabled {
        Some(Arc::new(InMemorySeriesCache::new(config.cache.max_entries)))
    } else {
        None
    };

    let state = Arc::new(AppState::new(
        theme_source,
        content_source,
        site_store,
        link_builders,
        locale_resolver,
        series_cache,
    ));

    // 首次加载站点；失败时以空站点启动，可通过 /api/site/reload 重试
    match state.reload_site_handler.handle(ReloadSite).await {
        Ok(response) => tracing::info!(
            "Site loaded: generation={}, pages={}, auto series keys={}",
            response.generation,
            response.pages,
            response.auto_series_keys.len()
        ),
        Err(e) => tracing::error!("Initial site load failed: {}", e),
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

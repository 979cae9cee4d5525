//! Application State
//!
//! HTTP 层共享的端口与 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Handlers
    ReloadSiteHandler, ResolveSeriesItemsHandler,
    // Ports
    ContentSourcePort, LinkBuilderFactoryPort, LocalePathResolverPort, SeriesCachePort,
    SiteStorePort, ThemeSourcePort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub site_store: Arc<dyn SiteStorePort>,
    pub series_cache: Option<Arc<dyn SeriesCachePort>>,

    // ========== Command Handlers ==========
    pub reload_site_handler: ReloadSiteHandler,

    // ========== Query Handlers ==========
    pub resolve_series_handler: ResolveSeriesItemsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        theme_source: Arc<dyn ThemeSourcePort>,
        content_source: Arc<dyn ContentSourcePort>,
        site_store: Arc<dyn SiteStorePort>,
        link_builders: Arc<dyn LinkBuilderFactoryPort>,
        locale_resolver: Arc<dyn LocalePathResolverPort>,
        series_cache: Option<Arc<dyn SeriesCachePort>>,
    ) -> Self {
        Self {
            site_store: site_store.clone(),
            series_cache: series_cache.clone(),

            reload_site_handler: ReloadSiteHandler::new(
                theme_source,
                content_source,
                site_store.clone(),
                series_cache.clone(),
            ),

            resolve_series_handler: ResolveSeriesItemsHandler::new(
                site_store,
                link_builders,
                locale_resolver,
                series_cache,
            ),
        }
    }
}

//! Site Command Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    ContentSourcePort, SeriesCachePort, SiteStorePort, ThemeSourcePort,
};
use crate::application::series::build_auto_series;
use crate::application::commands::{ReloadSite, ReloadSiteResponse};
use crate::domain::series::{PageIndex, SeriesConfigObject, SiteSnapshot};

/// ReloadSite Handler
///
/// 加载主题 -> 扫描内容 -> 生成自动 series -> 替换快照 -> 清空缓存
pub struct ReloadSiteHandler {
    theme_source: Arc<dyn ThemeSourcePort>,
    content_source: Arc<dyn ContentSourcePort>,
    site_store: Arc<dyn SiteStorePort>,
    series_cache: Option<Arc<dyn SeriesCachePort>>,
}

impl ReloadSiteHandler {
    pub fn new(
        theme_source: Arc<dyn ThemeSourcePort>,
        content_source: Arc<dyn ContentSourcePort>,
        site_store: Arc<dyn SiteStorePort>,
        series_cache: Option<Arc<dyn SeriesCachePort>>,
    ) -> Self {
        Self {
            theme_source,
            content_source,
            site_store,
            series_cache,
        }
    }

    pub async fn handle(&self, _command: ReloadSite) -> Result<ReloadSiteResponse, ApplicationError> {
        let theme = self.theme_source.load().await?;
        let pages = self.content_source.scan().await?;

        let auto_series = if theme.auto_set_series {
            build_auto_series(&pages)
        } else {
            SeriesConfigObject::new()
        };
        let auto_series_keys: Vec<String> = auto_series.keys().cloned().collect();
        let page_count = pages.len();

        let snapshot = SiteSnapshot::new(
            theme,
            auto_series,
            PageIndex::from_pages(&pages),
        );
        let generation = self.site_store.replace(snapshot);

        if let Some(cache) = &self.series_cache {
            cache.clear();
        }

        tracing::info!(
            generation = generation,
            pages = page_count,
            auto_series = auto_series_keys.len(),
            "Site reloaded"
        );

        Ok(ReloadSiteResponse {
            generation,
            pages: page_count,
            auto_series_keys,
        })
    }
}

//! Series Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    LinkBuilderFactoryPort, LocalePathResolverPort, SeriesCacheKey, SeriesCachePort,
    SiteStorePort,
};
use crate::application::queries::ResolveSeriesItems;
use crate::application::series::{RenderContext, SeriesResolver};
use crate::domain::series::RouteLocation;

// ============================================================================
// Response DTOs
// ============================================================================

/// 解析结果
///
/// `context` 已提供 series 项，交给渲染层继续向下传递
#[derive(Debug, Clone)]
pub struct ResolveSeriesItemsResponse {
    pub path: String,
    pub generation: u64,
    pub cached: bool,
    pub context: RenderContext,
}

// ============================================================================
// Handlers
// ============================================================================

/// ResolveSeriesItems Handler
pub struct ResolveSeriesItemsHandler {
    site_store: Arc<dyn SiteStorePort>,
    link_builders: Arc<dyn LinkBuilderFactoryPort>,
    locale_resolver: Arc<dyn LocalePathResolverPort>,
    series_cache: Option<Arc<dyn SeriesCachePort>>,
}

impl ResolveSeriesItemsHandler {
    pub fn new(
        site_store: Arc<dyn SiteStorePort>,
        link_builders: Arc<dyn LinkBuilderFactoryPort>,
        locale_resolver: Arc<dyn LocalePathResolverPort>,
        series_cache: Option<Arc<dyn SeriesCachePort>>,
    ) -> Self {
        Self {
            site_store,
            link_builders,
            locale_resolver,
            series_cache,
        }
    }

    pub fn handle(
        &self,
        query: ResolveSeriesItems,
    ) -> Result<ResolveSeriesItemsResponse, ApplicationError> {
        if !query.path.starts_with('/') {
            return Err(ApplicationError::validation(format!(
                "Route path must start with '/': {}",
                query.path
            )));
        }

        let snapshot = self.site_store.current();
        let key = SeriesCacheKey::new(snapshot.generation, &query.path, query.frontmatter.home);

        if let Some(items) = self.series_cache.as_ref().and_then(|c| c.get(&key)) {
            return Ok(ResolveSeriesItemsResponse {
                path: query.path,
                generation: snapshot.generation,
                cached: true,
                context: RenderContext::with_series_items(items),
            });
        }

        let resolver = SeriesResolver::new(
            self.link_builders.for_site(&snapshot),
            self.locale_resolver.clone(),
        );
        let items = resolver.resolve_series_items(
            &query.frontmatter,
            &snapshot.theme,
            &RouteLocation::new(query.path.as_str()),
            &snapshot.auto_series,
        );

        tracing::debug!(
            path = %query.path,
            generation = snapshot.generation,
            items = items.len(),
            "Series items resolved"
        );

        let mut context = RenderContext::new();
        context.provide_series_items(items);

        if let Some(cache) = &self.series_cache {
            cache.insert(key, context.use_series_items()?);
        }

        Ok(ResolveSeriesItemsResponse {
            path: query.path,
            generation: snapshot.generation,
            cached: false,
            context,
        })
    }
}

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（LinkBuilder、LocalePathResolver、ThemeSource 等）
//! - series: series 解析核心
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod series;

// Re-exports
pub use commands::{
    handlers::ReloadSiteHandler, ReloadSite, ReloadSiteResponse,
};

pub use error::ApplicationError;

pub use ports::{
    // Content / theme sources
    ContentError,
    ContentSourcePort,
    ThemeSourceError,
    ThemeSourcePort,
    // Collaborators
    LinkBuilderFactoryPort,
    LinkBuilderPort,
    LocalePathResolverPort,
    // Site store & cache
    SeriesCacheKey,
    SeriesCachePort,
    SeriesCacheStats,
    SeriesItemsRef,
    SiteStorePort,
};

pub use queries::{
    handlers::{ResolveSeriesItemsHandler, ResolveSeriesItemsResponse},
    ResolveSeriesItems,
};

pub use series::{build_auto_series, RenderContext, SeriesResolver};

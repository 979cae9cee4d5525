//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod content_source;
mod link_builder;
mod locale_resolver;
mod series_cache;
mod site_store;
mod theme_source;

pub use content_source::{ContentError, ContentSourcePort};
pub use link_builder::{LinkBuilderFactoryPort, LinkBuilderPort};
pub use locale_resolver::LocalePathResolverPort;
pub use series_cache::{SeriesCacheKey, SeriesCachePort, SeriesCacheStats, SeriesItemsRef};
pub use site_store::SiteStorePort;
pub use theme_source::{ThemeSourceError, ThemeSourcePort};

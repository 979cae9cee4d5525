//! Series Context - series 导航限界上下文
//!
//! 职责:
//! - 作者配置（数组 / 前缀映射）的类型化表示
//! - 解析后的导航项（链接 / 分组）
//! - 页面、路由与站点快照

mod entries;
mod errors;
mod items;
mod page;
mod theme;

pub use entries::{
    SeriesChild, SeriesConfig, SeriesConfigArray, SeriesConfigObject, SeriesEntry, SeriesGroup,
};
pub use errors::SeriesError;
pub use items::{NavGroup, NavLink, ResolvedSeriesItem};
pub use page::{PageFrontmatter, PageIndex, PageRecord, RouteLocation};
pub use theme::{SiteSnapshot, ThemeData};

//! Link Builder Port - 导航链接构建抽象
//!
//! 由路径字符串构建一个导航项：推断显示文本、规范化链接、补充路由元数据。
//! 具体的推断规则由 infrastructure/adapters 层实现。

use std::sync::Arc;

use crate::domain::series::{ResolvedSeriesItem, SiteSnapshot};

/// Link Builder Port
pub trait LinkBuilderPort: Send + Sync {
    /// 为目标路径构建导航项
    fn build_link(&self, target: &str) -> ResolvedSeriesItem;
}

/// 链接构建器依赖站点的页面表，每个快照对应一个构建器
pub trait LinkBuilderFactoryPort: Send + Sync {
    fn for_site(&self, snapshot: &SiteSnapshot) -> Arc<dyn LinkBuilderPort>;
}

//! Series Queries

use crate::domain::series::PageFrontmatter;

/// 为某个页面解析 series 项
#[derive(Debug, Clone)]
pub struct ResolveSeriesItems {
    /// 路由路径（可带百分号编码）
    pub path: String,
    pub frontmatter: PageFrontmatter,
}

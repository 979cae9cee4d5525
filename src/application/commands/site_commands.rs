//! Site Commands

/// 重新加载主题数据并重新扫描文档内容
#[derive(Debug, Clone, Default)]
pub struct ReloadSite;

/// 重新加载结果
#[derive(Debug, Clone)]
pub struct ReloadSiteResponse {
    pub generation: u64,
    pub pages: usize,
    pub auto_series_keys: Vec<String>,
}

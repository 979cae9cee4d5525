//! Series Context - 主题数据与站点快照

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::entries::{SeriesConfig, SeriesConfigObject};
use super::page::PageIndex;

/// 主题配置中与 series 相关的部分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesConfig>,

    /// 根据文档目录结构自动生成 series
    #[serde(default)]
    pub auto_set_series: bool,
}

/// 某一时刻的站点状态
///
/// 每次重新加载主题或内容都会产生新的快照，`generation` 单调递增
#[derive(Debug, Clone, Default)]
pub struct SiteSnapshot {
    pub generation: u64,
    pub theme: ThemeData,
    pub auto_series: SeriesConfigObject,
    pub pages: Arc<PageIndex>,
}

impl SiteSnapshot {
    /// generation 由站点存储在替换快照时分配
    pub fn new(theme: ThemeData, auto_series: SeriesConfigObject, pages: PageIndex) -> Self {
        Self {
            generation: 0,
            theme,
            auto_series,
            pages: Arc::new(pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_data_camel_case() {
        let theme: ThemeData = serde_json::from_value(serde_json::json!({
            "autoSetSeries": true,
            "series": { "/guide/": ["intro"] }
        }))
        .unwrap();
        assert!(theme.auto_set_series);
        assert!(theme.series.unwrap().as_object().is_some());
    }

    #[test]
    fn test_theme_data_defaults() {
        let theme: ThemeData = toml::from_str("").unwrap();
        assert!(!theme.auto_set_series);
        assert!(theme.series.is_none());
    }
}

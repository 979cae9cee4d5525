//! Series Context - 页面与路由

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 页面 frontmatter（解析 series 只关心其中少数字段）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFrontmatter {
    /// 首页不展示 series
    #[serde(default)]
    pub home: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PageFrontmatter {
    pub fn home() -> Self {
        Self {
            home: true,
            title: None,
        }
    }
}

/// 当前路由
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLocation {
    /// 原始路径，可能包含百分号编码
    pub path: String,
}

impl RouteLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// 百分号解码后的路径；解码结果不是合法 UTF-8 时返回 None
    pub fn decoded_path(&self) -> Option<String> {
        urlencoding::decode(&self.path).ok().map(|p| p.into_owned())
    }
}

/// 扫描内容目录得到的页面记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 路由路径，如 `/guide/intro.html`、`/guide/`
    pub route_path: String,
    /// 相对文档根目录的源文件路径，使用 `/` 分隔
    pub relative_path: String,
    pub title: String,
    #[serde(default)]
    pub frontmatter: PageFrontmatter,
}

/// 路由路径 -> 页面标题
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    titles: HashMap<String, String>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pages(pages: &[PageRecord]) -> Self {
        let titles = pages
            .iter()
            .map(|p| (p.route_path.clone(), p.title.clone()))
            .collect();
        Self { titles }
    }

    pub fn insert(&mut self, route_path: impl Into<String>, title: impl Into<String>) {
        self.titles.insert(route_path.into(), title.into());
    }

    pub fn title_of(&self, route_path: &str) -> Option<&str> {
        self.titles.get(route_path).map(String::as_str)
    }

    pub fn contains(&self, route_path: &str) -> bool {
        self.titles.contains_key(route_path)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

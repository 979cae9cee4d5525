//! Series Context - 解析后的导航项

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 导航链接（叶子节点）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub text: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            aria_label: None,
            rel: None,
            target: None,
        }
    }
}

/// 导航分组
///
/// 作者写在分组上的其他字段（`rel`、`target`、`icon` 等）保存在 `extra` 中并原样输出
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavGroup {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub children: Vec<ResolvedSeriesItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 解析后的 series 项
///
/// 解析器产出的要么是叶子链接，要么是带 children 的分组；
/// 作者直接写在分组 children 中的非字符串子项不做检查，以 `Passthrough` 原样保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedSeriesItem {
    Group(NavGroup),
    Link(NavLink),
    Passthrough(Value),
}

impl ResolvedSeriesItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Link(link) => &link.text,
            Self::Passthrough(value) => value.get("text").and_then(Value::as_str).unwrap_or(""),
        }
    }

    /// 叶子链接的目标路径；分组返回其可选 link
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.link.as_deref(),
            Self::Link(link) => Some(&link.link),
            Self::Passthrough(value) => value.get("link").and_then(Value::as_str),
        }
    }

    pub fn children(&self) -> &[ResolvedSeriesItem] {
        match self {
            Self::Group(group) => &group.children,
            Self::Link(_) | Self::Passthrough(_) => &[],
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl From<NavLink> for ResolvedSeriesItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<NavGroup> for ResolvedSeriesItem {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

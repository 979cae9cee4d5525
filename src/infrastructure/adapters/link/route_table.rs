//! Route Table Link Builder
//!
//! 以站点页面表为依据构建导航链接：
//! - 外部链接在新窗口打开
//! - 站内链接规范化为路由形式，已知页面使用页面标题
//! - 未知页面保留原始文本与链接

use std::sync::Arc;

use crate::application::ports::{LinkBuilderFactoryPort, LinkBuilderPort};
use crate::domain::series::{NavLink, PageIndex, ResolvedSeriesItem, SiteSnapshot};

const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "tel:", "//"];
const INDEX_STEMS: &[&str] = &["readme", "index"];

pub fn is_external(target: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|p| target.starts_with(p))
}

/// 将源文件路径或路由路径规范化为路由路径
///
/// - `foo.md` / `foo` -> `foo.html`
/// - `dir/README.md` / `dir/index` -> `dir/`
/// - 以 `/` 结尾或已是 `.html` 的保持不变
/// - `#hash`、`?query` 原样保留
pub fn normalize_route(target: &str) -> String {
    let split_at = target.find(|c: char| c == '#' || c == '?').unwrap_or(target.len());
    let (base, suffix) = target.split_at(split_at);

    if base.is_empty() || base.ends_with('/') || base.ends_with(".html") {
        return target.to_string();
    }

    let stem = base.strip_suffix(".md").unwrap_or(base);
    let (dir, file) = match stem.rfind('/') {
        Some(pos) => stem.split_at(pos + 1),
        None => ("", stem),
    };

    let route = if INDEX_STEMS.iter().any(|s| file.eq_ignore_ascii_case(s)) {
        dir.to_string()
    } else {
        format!("{}.html", stem)
    };

    format!("{}{}", route, suffix)
}

/// Route Table Link Builder
pub struct RouteTableLinkBuilder {
    pages: Arc<PageIndex>,
}

impl RouteTableLinkBuilder {
    pub fn new(pages: Arc<PageIndex>) -> Self {
        Self { pages }
    }
}

impl LinkBuilderPort for RouteTableLinkBuilder {
    fn build_link(&self, target: &str) -> ResolvedSeriesItem {
        if is_external(target) {
            return NavLink {
                text: target.to_string(),
                link: target.to_string(),
                aria_label: None,
                rel: Some("noopener noreferrer".to_string()),
                target: Some("_blank".to_string()),
            }
            .into();
        }

        let route = normalize_route(target);
        let route_path = route.split(|c: char| c == '#' || c == '?').next().unwrap_or_default();

        match self.pages.title_of(route_path) {
            Some(title) => NavLink::new(title, route.as_str()).into(),
            None => {
                tracing::debug!(link = %target, route = %route, "Series link points to an unknown page");
                NavLink::new(target, target).into()
            }
        }
    }
}

/// 为每个站点快照创建 [`RouteTableLinkBuilder`]
#[derive(Debug, Clone, Default)]
pub struct RouteTableLinkBuilderFactory;

impl LinkBuilderFactoryPort for RouteTableLinkBuilderFactory {
    fn for_site(&self, snapshot: &SiteSnapshot) -> Arc<dyn LinkBuilderPort> {
        Arc::new(RouteTableLinkBuilder::new(snapshot.pages.clone()))
    }
}

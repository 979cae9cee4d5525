//! Series Resolver
//!
//! 将主题配置 + 自动生成的 series 解析为当前路由对应的导航项列表。
//! 纯函数：不持有状态，不做 IO，相同输入总是得到相同输出。

use std::sync::Arc;

use crate::application::ports::{LinkBuilderPort, LocalePathResolverPort};
use crate::domain::series::{
    NavGroup, PageFrontmatter, ResolvedSeriesItem, RouteLocation, SeriesChild, SeriesConfig,
    SeriesConfigObject, SeriesEntry, SeriesGroup, ThemeData,
};

/// Series Resolver
#[derive(Clone)]
pub struct SeriesResolver {
    link_builder: Arc<dyn LinkBuilderPort>,
    locale_resolver: Arc<dyn LocalePathResolverPort>,
}

impl SeriesResolver {
    pub fn new(
        link_builder: Arc<dyn LinkBuilderPort>,
        locale_resolver: Arc<dyn LocalePathResolverPort>,
    ) -> Self {
        Self {
            link_builder,
            locale_resolver,
        }
    }

    /// 顶层入口
    ///
    /// 1. 以 `auto_series` 为底合并主题的 `series` 设置
    /// 2. 首页直接返回空
    /// 3. 合并结果总是映射，按当前路由解析；主题中数组或其他形态的设置本身不会被解析
    pub fn resolve_series_items(
        &self,
        frontmatter: &PageFrontmatter,
        theme: &ThemeData,
        route: &RouteLocation,
        auto_series: &SeriesConfigObject,
    ) -> Vec<ResolvedSeriesItem> {
        if matches!(
            theme.series,
            Some(SeriesConfig::Array(_) | SeriesConfig::Unsupported(_))
        ) {
            tracing::debug!(
                route = %route.path,
                "Theme series is not a path-keyed mapping, only the auto series applies"
            );
        }
        let series_config = SeriesConfig::merge_over(auto_series, theme.series.as_ref());

        if frontmatter.home {
            return Vec::new();
        }

        self.resolve_multi_series_items(&series_config, route)
    }

    /// 解析数组形态的配置，保持输入顺序与数量
    pub fn resolve_array_series_items(
        &self,
        series_path: &str,
        series_config: &[SeriesEntry],
    ) -> Vec<ResolvedSeriesItem> {
        series_config
            .iter()
            .map(|entry| match entry {
                SeriesEntry::Path(path) => self.resolve_path(series_path, path),
                SeriesEntry::Group(group) => self.resolve_group(series_path, group),
                SeriesEntry::Link(link) => link.clone().into(),
            })
            .collect()
    }

    /// 解析映射形态的配置：先为当前路由挑出 key，再按数组形态解析
    pub fn resolve_multi_series_items(
        &self,
        series_config: &SeriesConfigObject,
        route: &RouteLocation,
    ) -> Vec<ResolvedSeriesItem> {
        let route_path = route.decoded_path().unwrap_or_else(|| {
            tracing::warn!(route = %route.path, "Malformed percent-encoding in route path, using it as-is");
            route.path.clone()
        });

        let locale_paths: Vec<&str> = series_config.keys().map(String::as_str).collect();
        let series_path = self
            .locale_resolver
            .resolve_locale_path(&locale_paths, &route_path);

        let matched = series_config
            .get(&series_path)
            .map(Vec::as_slice)
            .unwrap_or_default();

        tracing::trace!(
            route = %route_path,
            series_path = %series_path,
            entries = matched.len(),
            "Resolved series path"
        );

        self.resolve_array_series_items(&series_path, matched)
    }

    /// 字符串条目：已包含前缀（纯文本包含，不按路径段判断）则原样使用，否则拼接前缀
    fn resolve_path(&self, series_path: &str, item: &str) -> ResolvedSeriesItem {
        let link = if item.contains(series_path) {
            item.to_string()
        } else {
            format!("{}{}", series_path, item)
        };
        self.link_builder.build_link(&link)
    }

    fn resolve_group(&self, series_path: &str, group: &SeriesGroup) -> ResolvedSeriesItem {
        let children = group
            .children
            .iter()
            .map(|child| match child {
                SeriesChild::Path(path) => self.resolve_path(series_path, path),
                SeriesChild::Item(raw) => ResolvedSeriesItem::Passthrough(raw.clone()),
            })
            .collect();

        NavGroup {
            text: group.text.clone(),
            collapsible: group.collapsible,
            aria_label: group.aria_label.clone(),
            link: group.link.clone(),
            children,
            extra: group.extra.clone(),
        }
        .into()
    }
}

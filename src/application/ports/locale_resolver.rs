//! Locale Path Resolver Port - 多语言路径前缀匹配抽象

/// Locale Path Resolver Port
///
/// 在一组路径前缀中为当前路由挑选最匹配的一个，回退策略由实现决定
pub trait LocalePathResolverPort: Send + Sync {
    /// `locale_paths` 为配置中的所有 key，`route_path` 已完成解码
    fn resolve_locale_path(&self, locale_paths: &[&str], route_path: &str) -> String;
}

//! Prefix Locale Resolver
//!
//! 候选前缀按路径层级降序、再按长度降序排列，返回第一个被路由路径以其开头的前缀；
//! 都不匹配时回退到 `/`。

use crate::application::ports::LocalePathResolverPort;

const ROOT_LOCALE_PATH: &str = "/";

#[derive(Debug, Clone, Default)]
pub struct PrefixLocaleResolver;

impl PrefixLocaleResolver {
    pub fn new() -> Self {
        Self
    }
}

impl LocalePathResolverPort for PrefixLocaleResolver {
    fn resolve_locale_path(&self, locale_paths: &[&str], route_path: &str) -> String {
        let mut candidates = locale_paths.to_vec();
        candidates.sort_by(|a, b| {
            let depth = |p: &str| p.split('/').count();
            depth(b)
                .cmp(&depth(a))
                .then_with(|| b.len().cmp(&a.len()))
        });

        candidates
            .into_iter()
            .find(|p| route_path.starts_with(p))
            .unwrap_or(ROOT_LOCALE_PATH)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(paths: &[&str], route: &str) -> String {
        PrefixLocaleResolver::new().resolve_locale_path(paths, route)
    }

    #[test]
    fn test_deepest_prefix_wins() {
        let paths = ["/", "/guide/", "/guide/advanced/"];
        assert_eq!(resolve(&paths, "/guide/advanced/a.html"), "/guide/advanced/");
        assert_eq!(resolve(&paths, "/guide/intro.html"), "/guide/");
        assert_eq!(resolve(&paths, "/blog/"), "/");
    }

    #[test]
    fn test_same_depth_prefers_longer() {
        let paths = ["/zh/", "/zh-hant/"];
        assert_eq!(resolve(&paths, "/zh-hant/guide.html"), "/zh-hant/");
        assert_eq!(resolve(&paths, "/zh/guide.html"), "/zh/");
    }

    #[test]
    fn test_falls_back_to_root() {
        assert_eq!(resolve(&["/guide/"], "/api/x.html"), "/");
        assert_eq!(resolve(&[], "/api/x.html"), "/");
    }

    #[test]
    fn test_prefix_match_is_textual() {
        // "/a/" 不是 "/ab/x" 的前缀，但 "/a" 是
        assert_eq!(resolve(&["/a"], "/ab/x"), "/a");
        assert_eq!(resolve(&["/a/"], "/ab/x"), "/");
    }
}

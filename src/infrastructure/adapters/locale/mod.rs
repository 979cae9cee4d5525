//! Locale Adapter - 路径前缀匹配

mod prefix_locale_resolver;

pub use prefix_locale_resolver::PrefixLocaleResolver;

//! Series 用例
//!
//! - resolver: 配置 -> 导航项
//! - auto_series: 目录结构 -> 配置
//! - context: 向后代组件提供解析结果

mod auto_series;
mod context;
mod resolver;

pub use auto_series::build_auto_series;
pub use context::RenderContext;
pub use resolver::SeriesResolver;

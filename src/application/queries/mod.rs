//! 应用层 - 查询（读操作）

mod series_queries;

pub mod handlers;

pub use series_queries::*;

//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Series Context: series 配置、导航项、页面与站点快照

pub mod series;

pub use series::*;

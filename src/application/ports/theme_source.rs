//! Theme Source Port - 主题数据来源抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::series::ThemeData;

/// 主题数据加载错误
#[derive(Debug, Error)]
pub enum ThemeSourceError {
    #[error("Theme file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse theme data: {0}")]
    Parse(String),

    #[error("Unsupported theme file format: {0}")]
    UnsupportedFormat(String),
}

/// Theme Source Port
#[async_trait]
pub trait ThemeSourcePort: Send + Sync {
    /// 读取当前主题数据
    async fn load(&self) -> Result<ThemeData, ThemeSourceError>;
}

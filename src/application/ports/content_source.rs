//! Content Source Port - 文档内容扫描抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::series::PageRecord;

/// 内容扫描错误
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Docs directory not found: {0}")]
    RootNotFound(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Content Source Port
#[async_trait]
pub trait ContentSourcePort: Send + Sync {
    /// 扫描所有页面，结果按相对路径排序
    async fn scan(&self) -> Result<Vec<PageRecord>, ContentError>;
}

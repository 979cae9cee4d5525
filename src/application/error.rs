//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{ContentError, ThemeSourceError};
use crate::domain::series::SeriesError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 主题数据加载失败
    #[error("Theme error: {0}")]
    ThemeError(String),

    /// 内容扫描失败
    #[error("Content error: {0}")]
    ContentError(String),

    /// series 上下文使用错误
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ThemeSourceError> for ApplicationError {
    fn from(err: ThemeSourceError) -> Self {
        Self::ThemeError(err.to_string())
    }
}

impl From<ContentError> for ApplicationError {
    fn from(err: ContentError) -> Self {
        Self::ContentError(err.to_string())
    }
}

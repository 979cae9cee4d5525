//! Series Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// 在没有提供者的上下文中读取 series 项（调用方的编程错误）
    #[error("use_series_items() is called without provider.")]
    ProviderMissing,
}

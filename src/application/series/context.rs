//! Render Context - 显式传递的渲染上下文
//!
//! 解析好的 series 项由上层提供，子组件通过 [`RenderContext::use_series_items`] 读取。
//! 未提供时读取属于调用方的编程错误。

use std::sync::Arc;

use crate::application::ports::SeriesItemsRef;
use crate::domain::series::{ResolvedSeriesItem, SeriesError};

#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    series_items: Option<SeriesItemsRef>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series_items(items: SeriesItemsRef) -> Self {
        Self {
            series_items: Some(items),
        }
    }

    /// 为当前作用域及其后代提供 series 项
    pub fn provide_series_items(&mut self, items: Vec<ResolvedSeriesItem>) {
        self.series_items = Some(Arc::new(items));
    }

    /// 创建继承当前值的后代作用域
    pub fn child(&self) -> Self {
        self.clone()
    }

    pub fn use_series_items(&self) -> Result<SeriesItemsRef, SeriesError> {
        self.series_items
            .clone()
            .ok_or(SeriesError::ProviderMissing)
    }
}

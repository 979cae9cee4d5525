//! Site Store Port - 当前站点快照

use std::sync::Arc;

use crate::domain::series::SiteSnapshot;

/// Site Store Port
///
/// 读多写少：读取方拿到的是不可变快照，重新加载时整体替换
pub trait SiteStorePort: Send + Sync {
    /// 当前快照
    fn current(&self) -> Arc<SiteSnapshot>;

    /// 替换快照：分配新的 generation 并返回
    fn replace(&self, snapshot: SiteSnapshot) -> u64;
}

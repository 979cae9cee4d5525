//! In-Memory Site Store

use std::sync::{Arc, RwLock};

use crate::application::ports::SiteStorePort;
use crate::domain::series::SiteSnapshot;

/// 内存站点快照存储
pub struct InMemorySiteStore {
    current: RwLock<Arc<SiteSnapshot>>,
}

impl InMemorySiteStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(SiteSnapshot::default())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemorySiteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteStorePort for InMemorySiteStore {
    fn current(&self) -> Arc<SiteSnapshot> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace(&self, mut snapshot: SiteSnapshot) -> u64 {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        snapshot.generation = guard.generation + 1;
        let generation = snapshot.generation;
        *guard = Arc::new(snapshot);
        tracing::debug!(generation = generation, "Site snapshot replaced");
        generation
    }
}

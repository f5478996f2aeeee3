pub use self::daemon_set::DaemonSetItem;
pub use self::event::WarningEvent;
pub use self::service::{DaemonSetService, ResourceService, ServiceError};

pub mod daemon_set;
pub mod event;

mod service;

#[cfg(test)]
#[path = "./mod.tests.rs"]
mod resources_tests;

/// Aggregate rollout health for one listed resource.
/// **Note** that `pending` is derived as `desired - ready`, saturating at zero.
#[derive(Default, Debug, Clone)]
pub struct PodInfo {
    pub desired: u64,
    pub current: u64,
    pub ready: u64,
    pub pending: u64,
    pub warnings: Vec<WarningEvent>,
}

impl PodInfo {
    /// Creates new [`PodInfo`] instance from scheduling counters and associated warnings.
    pub fn new(desired: u64, current: u64, ready: u64, warnings: Vec<WarningEvent>) -> Self {
        Self {
            desired,
            current,
            ready,
            pending: desired.saturating_sub(ready),
            warnings,
        }
    }
}

/// Cumulative pod counters for a whole fetched collection.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ListStats {
    pub desired: u64,
    pub current: u64,
    pub ready: u64,
    pub pending: u64,
    pub warnings: usize,
}

impl ListStats {
    /// Accumulates counters of a single item into the collection summary.
    pub fn add(&mut self, info: &PodInfo) {
        self.desired += info.desired;
        self.current += info.current;
        self.ready += info.ready;
        self.pending += info.pending;
        self.warnings += info.warnings.len();
    }

    /// Computes [`ListStats`] over all provided items.
    pub fn from_items(items: &[DaemonSetItem]) -> Self {
        let mut stats = Self::default();
        for item in items {
            stats.add(&item.pod_info);
        }

        stats
    }
}

/// One fetch response: fresh items plus metrics cumulative over the whole collection.
#[derive(Default)]
pub struct ListResult {
    pub items: Vec<DaemonSetItem>,
    pub stats: ListStats,
}

impl ListResult {
    /// Creates new [`ListResult`] instance, computing cumulative stats from the items.
    pub fn new(items: Vec<DaemonSetItem>) -> Self {
        let stats = ListStats::from_items(&items);
        Self { items, stats }
    }
}

#[cfg(test)]
#[path = "./status.tests.rs"]
mod status_tests;

/// Visual state of a listed resource.
/// The three states are exhaustive and mutually exclusive: warnings dominate
/// a non-zero pending count, pending dominates success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Error,
    Pending,
    Success,
}

/// One registered (predicate, icon, style) binding for per-item status rendering.
pub struct StatusBinding<T> {
    pub status: ResourceStatus,
    pub icon: char,
    pub style: &'static str,
    predicate: fn(&T) -> bool,
}

/// Ordered status bindings for one view, established once at construction.
/// Resolution picks the first binding whose predicate holds for an item.
pub struct StatusBindings<T> {
    bindings: Vec<StatusBinding<T>>,
}

impl<T> Default for StatusBindings<T> {
    fn default() -> Self {
        Self { bindings: Vec::new() }
    }
}

impl<T> StatusBindings<T> {
    /// Registers a status binding; bindings are examined in registration order.
    pub fn register(&mut self, status: ResourceStatus, icon: char, style: &'static str, predicate: fn(&T) -> bool) {
        self.bindings.push(StatusBinding {
            status,
            icon,
            style,
            predicate,
        });
    }

    /// Returns the first binding whose predicate holds for the provided item.
    pub fn resolve(&self, item: &T) -> Option<&StatusBinding<T>> {
        self.bindings.iter().find(|b| (b.predicate)(item))
    }

    /// Returns the status of the provided item, if any binding matches.
    pub fn status_of(&self, item: &T) -> Option<ResourceStatus> {
        self.resolve(item).map(|b| b.status)
    }
}

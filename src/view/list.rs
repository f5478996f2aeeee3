use kube::api::ListParams;
use tracing::warn;

use crate::kubernetes::SessionSelection;
use crate::kubernetes::resources::{DaemonSetItem, ListResult, ListStats, ResourceService, ServiceError};
use crate::notifications::NotificationSink;
use crate::view::column::{self, Column, ColumnRegistry};
use crate::view::status::{ResourceStatus, StatusBinding, StatusBindings};

#[cfg(test)]
#[path = "./list.tests.rs"]
mod list_tests;

/// Generic tabular view over one listable resource endpoint.
/// Composed from a fetch service, a column registry and status bindings;
/// every refresh replaces the item collection and stats wholesale.
pub struct ResourceListView<S> {
    service: S,
    columns: ColumnRegistry,
    bindings: StatusBindings<DaemonSetItem>,
    items: Vec<DaemonSetItem>,
    stats: ListStats,
    error: Option<String>,
    notifications: Option<NotificationSink>,
    generation: u64,
}

impl<S: ResourceService> ResourceListView<S> {
    /// Creates new [`ResourceListView`] instance.
    pub fn new(service: S, columns: ColumnRegistry, bindings: StatusBindings<DaemonSetItem>) -> Self {
        Self {
            service,
            columns,
            bindings,
            items: Vec::new(),
            stats: ListStats::default(),
            error: None,
            notifications: None,
            generation: 0,
        }
    }

    /// Attaches a notification sink that fetch failures are reported to.
    pub fn with_notifications(mut self, notifications: NotificationSink) -> Self {
        self.notifications = Some(notifications);
        self
    }

    /// Fetches a fresh list result and replaces the current collection with it.
    pub async fn refresh(&mut self, params: ListParams) {
        let generation = self.begin_refresh();
        let result = self.service.fetch(params).await;
        self.apply_result(generation, result);
    }

    /// Starts a new refresh cycle and returns its generation ticket.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Lands a completed fetch, unless a newer refresh cycle has started since.
    pub fn apply_result(&mut self, generation: u64, result: Result<ListResult, ServiceError>) {
        if generation != self.generation {
            return;
        }

        match result {
            Ok(result) => {
                self.items = result.items;
                self.stats = result.stats;
                self.error = None;
            },
            Err(error) => {
                warn!("cannot refresh the resource list: {}", error);
                if let Some(notifications) = &self.notifications {
                    notifications.show_error(format!("Cannot fetch resource list: {error}"));
                }

                self.error = Some(error.to_string());
            },
        }
    }

    /// Returns the currently held item collection.
    pub fn items(&self) -> &[DaemonSetItem] {
        &self.items
    }

    /// Returns cumulative stats for the currently held collection.
    pub fn stats(&self) -> &ListStats {
        &self.stats
    }

    /// Returns the error recorded by the last refresh, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns descriptors of all currently visible columns, in display order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns.visible_columns()
    }

    /// Returns identifiers of all currently visible columns, in display order.
    pub fn display_columns(&self) -> Vec<&'static str> {
        self.columns.display_columns()
    }

    /// Returns the status binding that applies to the provided item.
    pub fn status_of(&self, item: &DaemonSetItem) -> Option<&StatusBinding<DaemonSetItem>> {
        self.bindings.resolve(item)
    }
}

/// Builds the daemonset list view: base columns, the action column,
/// the session dependent namespace column and the status icon bindings.
pub fn daemon_set_view<S: ResourceService>(service: S, session: SessionSelection) -> ResourceListView<S> {
    let mut columns = ColumnRegistry::new([
        column::STATUS_ICON,
        column::NAME,
        column::LABELS,
        column::PODS,
        column::CREATED,
        column::IMAGES,
    ]);
    columns.register_action_column(column::MENU);
    columns.register_dynamic_column(column::NAMESPACE, column::NAME_ID, move || session.is_multiple());

    let mut bindings = StatusBindings::default();
    bindings.register(ResourceStatus::Error, '✖', "error", DaemonSetItem::is_in_error_state);
    bindings.register(ResourceStatus::Pending, '◷', "muted", DaemonSetItem::is_in_pending_state);
    bindings.register(ResourceStatus::Success, '✔', "success", DaemonSetItem::is_in_success_state);

    ResourceListView::new(service, columns, bindings)
}

use kube::api::{Api, ApiResource, DynamicObject, ListParams};
use std::collections::HashMap;
use tracing::debug;

use crate::kubernetes::client::KubernetesClient;
use crate::kubernetes::resources::{ListResult, WarningEvent, daemon_set, event};
use crate::kubernetes::utils::get_object_uid;
use crate::kubernetes::NamespaceSelector;

const WARNING_EVENTS_FIELDS: &str = "type=Warning";

/// Possible errors from fetching a resource list.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// Failed to list resources from the kubernetes API.
    #[error("failed to list resources from the kubernetes API")]
    KubeError(#[from] kube::Error),
}

/// Asynchronous, single-shot access to one listable resource endpoint.
/// Implementations do not retry; failures are returned to the caller.
pub trait ResourceService {
    /// Fetches one [`ListResult`] using the provided list parameters.
    fn fetch(&self, params: ListParams) -> impl Future<Output = Result<ListResult, ServiceError>> + Send;
}

/// Kube-backed [`ResourceService`] for the `daemonset` resource.
/// Endpoint and namespace scope are fixed at construction.
pub struct DaemonSetService {
    api: Api<DynamicObject>,
    events: Api<DynamicObject>,
    selector: NamespaceSelector,
}

impl DaemonSetService {
    /// Creates new [`DaemonSetService`] instance for the default `daemonsets` endpoint.
    pub fn new(client: &KubernetesClient, selector: NamespaceSelector) -> Self {
        Self::with_endpoint(client, daemon_set::api_resource(), selector)
    }

    /// Creates new [`DaemonSetService`] instance for the provided endpoint.
    pub fn with_endpoint(client: &KubernetesClient, endpoint: ApiResource, selector: NamespaceSelector) -> Self {
        let api = client.get_api(&endpoint, &selector);
        let events = client.get_api(&event::api_resource(), &selector);

        Self { api, events, selector }
    }
}

impl ResourceService for DaemonSetService {
    async fn fetch(&self, params: ListParams) -> Result<ListResult, ServiceError> {
        let objects = self.api.list(&params).await?;
        let events = self.events.list(&ListParams::default().fields(WARNING_EVENTS_FIELDS)).await?;
        let mut warnings = group_warnings(&events.items);

        let items = objects
            .items
            .iter()
            .filter(|o| o.metadata.namespace.as_deref().is_none_or(|ns| self.selector.contains(ns)))
            .map(|o| daemon_set::item(o, warnings.remove(&get_object_uid(o)).unwrap_or_default()))
            .collect::<Vec<_>>();

        debug!("fetched {} daemonsets in {}", items.len(), self.selector);

        Ok(ListResult::new(items))
    }
}

/// Groups warning events by the UID of the object they refer to.
fn group_warnings(events: &[DynamicObject]) -> HashMap<String, Vec<WarningEvent>> {
    let mut warnings: HashMap<String, Vec<WarningEvent>> = HashMap::new();
    for object in events {
        if let (Some(uid), Some(warning)) = (event::involved_object_uid(object), event::warning(object)) {
            warnings.entry(uid).or_default().push(warning);
        }
    }

    warnings
}

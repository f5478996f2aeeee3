use k8s_openapi::jiff::Timestamp;
use kube::ResourceExt;
use kube::api::{ApiResource, DynamicObject};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::kubernetes::resources::{PodInfo, WarningEvent};
use crate::kubernetes::utils::{format_timestamp, get_object_uid};
use crate::view::column;

#[cfg(test)]
#[path = "./daemon_set.tests.rs"]
mod daemon_set_tests;

/// Returns [`ApiResource`] for the `daemonset` kubernetes resource.
pub fn api_resource() -> ApiResource {
    ApiResource::erase::<k8s_openapi::api::apps::v1::DaemonSet>(&())
}

/// One listed `daemonset` kubernetes resource.
/// **Note** that `pod_info` is always present, extraction never yields an item without it.
#[derive(Default, Debug, Clone)]
pub struct DaemonSetItem {
    pub uid: String,
    pub name: String,
    pub namespace: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub creation_timestamp: Option<Timestamp>,
    pub images: Vec<String>,
    pub pod_info: PodInfo,
}

/// Creates [`DaemonSetItem`] from the `daemonset` kubernetes resource
/// and the warning events already joined to it.
pub fn item(object: &DynamicObject, warnings: Vec<WarningEvent>) -> DaemonSetItem {
    let status = &object.data["status"];
    let desired = status["desiredNumberScheduled"].as_u64().unwrap_or_default();
    let current = status["currentNumberScheduled"].as_u64().unwrap_or_default();
    let ready = status["numberReady"].as_u64().unwrap_or_default();

    DaemonSetItem {
        uid: get_object_uid(object),
        name: object.name_any(),
        namespace: object.metadata.namespace.clone(),
        labels: object.metadata.labels.clone().unwrap_or_default(),
        creation_timestamp: object.metadata.creation_timestamp.as_ref().map(|t| t.0),
        images: get_images(object),
        pod_info: PodInfo::new(desired, current, ready, warnings),
    }
}

impl DaemonSetItem {
    /// Returns `true` if the item has at least one warning event.
    pub fn is_in_error_state(&self) -> bool {
        !self.pod_info.warnings.is_empty()
    }

    /// Returns `true` if the item has no warnings but some pods are still pending.
    pub fn is_in_pending_state(&self) -> bool {
        self.pod_info.warnings.is_empty() && self.pod_info.pending > 0
    }

    /// Returns `true` if the item has no warnings and no pending pods.
    pub fn is_in_success_state(&self) -> bool {
        self.pod_info.warnings.is_empty() && self.pod_info.pending == 0
    }

    /// Returns `true` if the item should expose an error detail row.
    pub fn has_errors(&self) -> bool {
        self.is_in_error_state()
    }

    /// Returns warning events associated with the item, as received from the fetch.
    pub fn warnings(&self) -> &[WarningEvent] {
        &self.pod_info.warnings
    }

    /// Returns display text for the provided column identifier.
    pub fn cell_text(&self, column_id: &str) -> Cow<'_, str> {
        match column_id {
            column::NAMESPACE_ID => Cow::Borrowed(self.namespace.as_deref().unwrap_or("n/a")),
            column::NAME_ID => Cow::Borrowed(self.name.as_str()),
            column::LABELS_ID => Cow::Owned(labels_to_string(&self.labels)),
            column::PODS_ID => Cow::Owned(format!("{}/{}", self.pod_info.ready, self.pod_info.desired)),
            column::CREATED_ID => match self.creation_timestamp.as_ref() {
                Some(time) => Cow::Owned(format_timestamp(time)),
                None => Cow::Borrowed("n/a"),
            },
            column::IMAGES_ID => Cow::Owned(self.images.join(",")),
            _ => Cow::Borrowed(""),
        }
    }
}

fn get_images(object: &DynamicObject) -> Vec<String> {
    object.data["spec"]["template"]["spec"]["containers"]
        .as_array()
        .map(|containers| {
            containers
                .iter()
                .filter_map(|c| c["image"].as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn labels_to_string(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::from_value;
use kube::api::{ApiResource, DynamicObject};

#[cfg(test)]
#[path = "./event.tests.rs"]
mod event_tests;

const WARNING_TYPE: &str = "Warning";

/// Returns [`ApiResource`] for the `event` kubernetes resource.
pub fn api_resource() -> ApiResource {
    ApiResource::erase::<k8s_openapi::api::core::v1::Event>(&())
}

/// One abnormal condition recorded for a kubernetes resource.
#[derive(Default, Debug, Clone)]
pub struct WarningEvent {
    pub reason: String,
    pub message: String,
    pub involved_kind: String,
    pub timestamp: Option<Timestamp>,
}

/// Creates [`WarningEvent`] from the `event` kubernetes resource.
/// Returns `None` for events that are not of the `Warning` type.
pub fn warning(object: &DynamicObject) -> Option<WarningEvent> {
    if object.data["type"].as_str() != Some(WARNING_TYPE) {
        return None;
    }

    Some(WarningEvent {
        reason: object.data["reason"].as_str().unwrap_or_default().to_owned(),
        message: object.data["message"].as_str().unwrap_or_default().to_owned(),
        involved_kind: object.data["involvedObject"]["kind"].as_str().unwrap_or_default().to_owned(),
        timestamp: get_timestamp(object),
    })
}

/// Returns the UID of the object the event refers to, used to join warnings to listed items.
pub fn involved_object_uid(object: &DynamicObject) -> Option<String> {
    let involved = &object.data["involvedObject"];
    if let Some(uid) = involved["uid"].as_str() {
        return Some(uid.to_owned());
    }

    let name = involved["name"].as_str()?;
    let namespace = involved["namespace"].as_str().unwrap_or_default();

    Some(format!("_{name}{namespace}_"))
}

fn get_timestamp(object: &DynamicObject) -> Option<Timestamp> {
    let value = if object.data["lastTimestamp"].is_null() {
        object.data["eventTime"].clone()
    } else {
        object.data["lastTimestamp"].clone()
    };

    from_value::<Time>(value).ok().map(|t| t.0)
}

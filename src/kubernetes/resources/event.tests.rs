use k8s_openapi::serde_json::json;

use super::*;

#[test]
fn warning_from_object_test() {
    let object = test_event("Warning", Some("2024-05-01T10:00:00Z"));

    let warning = warning(&object).unwrap();

    assert_eq!("FailedScheduling", warning.reason);
    assert_eq!("0/3 nodes are available", warning.message);
    assert_eq!("DaemonSet", warning.involved_kind);
    assert!(warning.timestamp.is_some());
}

#[test]
fn normal_events_are_skipped_test() {
    let object = test_event("Normal", Some("2024-05-01T10:00:00Z"));

    assert!(warning(&object).is_none());
}

#[test]
fn timestamp_falls_back_to_event_time_test() {
    let mut object = test_event("Warning", None);
    object.data["eventTime"] = json!("2024-05-01T10:00:00Z");

    let warning = warning(&object).unwrap();

    assert!(warning.timestamp.is_some());
}

#[test]
fn involved_object_uid_test() {
    let object = test_event("Warning", None);

    assert_eq!(Some("uid-ds"), involved_object_uid(&object).as_deref());
}

#[test]
fn involved_object_uid_fallback_test() {
    let mut object = test_event("Warning", None);
    object.data["involvedObject"] = json!({ "kind": "DaemonSet", "name": "agent", "namespace": "default" });

    assert_eq!(Some("_agentdefault_"), involved_object_uid(&object).as_deref());
}

#[test]
fn involved_object_uid_missing_test() {
    let mut object = test_event("Warning", None);
    object.data["involvedObject"] = json!({ "kind": "DaemonSet" });

    assert_eq!(None, involved_object_uid(&object));
}

fn test_event(event_type: &str, last_timestamp: Option<&str>) -> DynamicObject {
    let mut object = DynamicObject::new("test-event", &api_resource()).within("default");
    object.data = json!({
        "type": event_type,
        "reason": "FailedScheduling",
        "message": "0/3 nodes are available",
        "involvedObject": {
            "kind": "DaemonSet",
            "name": "agent",
            "namespace": "default",
            "uid": "uid-ds",
        },
        "lastTimestamp": last_timestamp,
    });

    object
}

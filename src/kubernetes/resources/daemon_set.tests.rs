use k8s_openapi::serde_json::json;
use rstest::rstest;

use super::*;

#[test]
fn item_from_object_test() {
    let object = test_object("test", 5, 5, 3);

    let item = item(&object, Vec::new());

    assert_eq!("uid-test", item.uid);
    assert_eq!("test", item.name);
    assert_eq!(Some("default"), item.namespace.as_deref());
    assert_eq!(Some("test"), item.labels.get("app").map(String::as_str));
    assert_eq!(vec!["registry.io/agent:1.2.3".to_owned()], item.images);
    assert_eq!(5, item.pod_info.desired);
    assert_eq!(3, item.pod_info.ready);
    assert_eq!(2, item.pod_info.pending);
    assert!(item.pod_info.warnings.is_empty());
}

#[test]
fn item_joins_warnings_test() {
    let object = test_object("test", 1, 1, 1);
    let warnings = vec![test_warning("ImagePullBackOff")];

    let item = item(&object, warnings);

    assert_eq!(1, item.warnings().len());
    assert_eq!("ImagePullBackOff", item.warnings()[0].reason);
}

#[rstest]
#[case(0, 0, false, false, true)]
#[case(0, 2, false, true, false)]
#[case(1, 0, true, false, false)]
#[case(1, 2, true, false, false)]
#[case(3, 5, true, false, false)]
fn state_predicates_test(
    #[case] warnings: usize,
    #[case] pending: u64,
    #[case] is_error: bool,
    #[case] is_pending: bool,
    #[case] is_success: bool,
) {
    let item = test_item(warnings, pending);

    assert_eq!(is_error, item.is_in_error_state());
    assert_eq!(is_pending, item.is_in_pending_state());
    assert_eq!(is_success, item.is_in_success_state());
    assert_eq!(is_error, item.has_errors());
}

#[rstest]
#[case(0, 0)]
#[case(0, 7)]
#[case(1, 0)]
#[case(2, 3)]
fn states_are_exhaustive_and_exclusive_test(#[case] warnings: usize, #[case] pending: u64) {
    let item = test_item(warnings, pending);

    let matching = [item.is_in_error_state(), item.is_in_pending_state(), item.is_in_success_state()]
        .iter()
        .filter(|p| **p)
        .count();

    assert_eq!(1, matching);
}

#[test]
fn cell_text_test() {
    let object = test_object("test", 5, 5, 3);
    let item = item(&object, Vec::new());

    assert_eq!("test", item.cell_text(column::NAME_ID));
    assert_eq!("default", item.cell_text(column::NAMESPACE_ID));
    assert_eq!("app=test", item.cell_text(column::LABELS_ID));
    assert_eq!("3/5", item.cell_text(column::PODS_ID));
    assert_eq!("n/a", item.cell_text(column::CREATED_ID));
    assert_eq!("registry.io/agent:1.2.3", item.cell_text(column::IMAGES_ID));
    assert_eq!("", item.cell_text("unknown"));
}

fn test_object(name: &str, desired: u64, current: u64, ready: u64) -> DynamicObject {
    let mut object = DynamicObject::new(name, &api_resource()).within("default");
    object.metadata.uid = Some(format!("uid-{name}"));
    object.metadata.labels = Some([("app".to_owned(), name.to_owned())].into());
    object.data = json!({
        "spec": {
            "template": {
                "spec": {
                    "containers": [{ "name": "agent", "image": "registry.io/agent:1.2.3" }],
                },
            },
        },
        "status": {
            "desiredNumberScheduled": desired,
            "currentNumberScheduled": current,
            "numberReady": ready,
        },
    });

    object
}

fn test_item(warnings: usize, pending: u64) -> DaemonSetItem {
    DaemonSetItem {
        name: "test".to_owned(),
        pod_info: PodInfo::new(pending, pending, 0, vec![WarningEvent::default(); warnings]),
        ..Default::default()
    }
}

fn test_warning(reason: &str) -> WarningEvent {
    WarningEvent {
        reason: reason.to_owned(),
        message: format!("Back-off pulling image: {reason}"),
        involved_kind: "DaemonSet".to_owned(),
        timestamp: None,
    }
}

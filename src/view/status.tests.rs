use rstest::rstest;

use crate::kubernetes::resources::{DaemonSetItem, PodInfo, WarningEvent};

use super::*;

fn test_bindings() -> StatusBindings<DaemonSetItem> {
    let mut bindings = StatusBindings::default();
    bindings.register(ResourceStatus::Error, '✖', "error", DaemonSetItem::is_in_error_state);
    bindings.register(ResourceStatus::Pending, '◷', "muted", DaemonSetItem::is_in_pending_state);
    bindings.register(ResourceStatus::Success, '✔', "success", DaemonSetItem::is_in_success_state);

    bindings
}

fn test_item(warnings: usize, pending: u64) -> DaemonSetItem {
    DaemonSetItem {
        name: "test".to_owned(),
        pod_info: PodInfo::new(pending, pending, 0, vec![WarningEvent::default(); warnings]),
        ..Default::default()
    }
}

#[rstest]
#[case(0, 0, ResourceStatus::Success)]
#[case(0, 2, ResourceStatus::Pending)]
#[case(1, 0, ResourceStatus::Error)]
#[case(1, 2, ResourceStatus::Error)]
#[case(5, 0, ResourceStatus::Error)]
fn resolve_test(#[case] warnings: usize, #[case] pending: u64, #[case] expected: ResourceStatus) {
    let bindings = test_bindings();
    let item = test_item(warnings, pending);

    assert_eq!(Some(expected), bindings.status_of(&item));
}

#[test]
fn warnings_dominate_pending_test() {
    let bindings = test_bindings();
    let item = test_item(1, 0);

    let binding = bindings.resolve(&item).unwrap();

    assert_eq!('✖', binding.icon);
    assert_eq!("error", binding.style);
}

#[test]
fn resolve_is_first_match_test() {
    let mut bindings = StatusBindings::default();
    bindings.register(ResourceStatus::Success, '✔', "success", |_| true);
    bindings.register(ResourceStatus::Error, '✖', "error", |_| true);

    assert_eq!(Some(ResourceStatus::Success), bindings.status_of(&test_item(0, 0)));
}

#[test]
fn no_binding_matches_test() {
    let mut bindings = StatusBindings::default();
    bindings.register(ResourceStatus::Error, '✖', "error", |_| false);

    assert!(bindings.resolve(&test_item(0, 0)).is_none());
}

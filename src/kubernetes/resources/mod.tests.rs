use rstest::rstest;

use super::*;

#[rstest]
#[case(5, 5, 0)]
#[case(5, 3, 2)]
#[case(3, 5, 0)]
#[case(0, 0, 0)]
fn pod_info_pending_test(#[case] desired: u64, #[case] ready: u64, #[case] pending: u64) {
    let info = PodInfo::new(desired, desired, ready, Vec::new());

    assert_eq!(pending, info.pending);
}

#[test]
fn list_stats_test() {
    let items = vec![
        test_item("first", 3, 3, Vec::new()),
        test_item("second", 5, 2, vec![WarningEvent::default()]),
        test_item("third", 2, 0, vec![WarningEvent::default(), WarningEvent::default()]),
    ];

    let result = ListResult::new(items);

    let expected = ListStats {
        desired: 10,
        current: 10,
        ready: 5,
        pending: 5,
        warnings: 3,
    };
    assert_eq!(expected, result.stats);
}

#[test]
fn list_stats_describe_whole_collection_test() {
    let items = vec![test_item("first", 1, 0, Vec::new()), test_item("second", 1, 0, Vec::new())];

    let stats = ListStats::from_items(&items);

    assert_eq!(2, stats.pending);
    assert!(items.iter().all(|i| i.pod_info.pending == 1));
}

fn test_item(name: &str, desired: u64, ready: u64, warnings: Vec<WarningEvent>) -> DaemonSetItem {
    DaemonSetItem {
        uid: format!("_{name}_"),
        name: name.to_owned(),
        namespace: Some("default".to_owned()),
        pod_info: PodInfo::new(desired, desired, ready, warnings),
        ..Default::default()
    }
}

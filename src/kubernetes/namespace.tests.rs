use rstest::rstest;

use super::*;

#[rstest]
#[case("all", true, true)]
#[case("", true, true)]
#[case("kube-system", false, false)]
#[case("kube-system,default", false, true)]
#[case("default, test, other", false, true)]
#[case("default,all", true, true)]
fn selector_from_test(#[case] value: &str, #[case] is_all: bool, #[case] is_multiple: bool) {
    let selector = NamespaceSelector::from(value);

    assert_eq!(is_all, selector.is_all());
    assert_eq!(is_multiple, selector.is_multiple());
}

#[test]
fn as_single_test() {
    assert_eq!(Some("default"), NamespaceSelector::from("default").as_single());
    assert_eq!(None, NamespaceSelector::from("default,test").as_single());
    assert_eq!(None, NamespaceSelector::all().as_single());
}

#[test]
fn contains_test() {
    let selector = NamespaceSelector::from("default,test");

    assert!(selector.contains("default"));
    assert!(selector.contains("test"));
    assert!(!selector.contains("kube-system"));

    assert!(NamespaceSelector::all().contains("anything"));
}

#[test]
fn session_selection_test() {
    let session = SessionSelection::new(NamespaceSelector::from("default"));
    assert!(!session.is_multiple());

    session.set(NamespaceSelector::from("default,test"));
    assert!(session.is_multiple());

    let other = session.clone();
    other.set(NamespaceSelector::from("default"));
    assert!(!session.is_multiple());
}

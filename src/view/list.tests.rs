use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::kubernetes::resources::{PodInfo, WarningEvent};
use crate::kubernetes::{NamespaceSelector, SessionSelection};
use crate::notifications::NotificationKind;

use super::*;

struct StubService {
    items: Vec<DaemonSetItem>,
    fail: Arc<AtomicBool>,
    last_params: Arc<Mutex<Option<ListParams>>>,
}

impl StubService {
    fn new(items: Vec<DaemonSetItem>) -> Self {
        Self {
            items,
            fail: Arc::new(AtomicBool::new(false)),
            last_params: Arc::new(Mutex::new(None)),
        }
    }
}

impl ResourceService for StubService {
    async fn fetch(&self, params: ListParams) -> Result<ListResult, ServiceError> {
        *self.last_params.lock().unwrap() = Some(params.clone());

        if self.fail.load(Ordering::Relaxed) {
            return Err(ServiceError::KubeError(kube::Error::Api(
                kube::core::Status::failure("daemonsets is forbidden", "Forbidden").with_code(403).boxed(),
            )));
        }

        let items = match params.label_selector.as_deref() {
            Some(selector) => self.items.iter().filter(|i| matches_selector(i, selector)).cloned().collect(),
            None => self.items.clone(),
        };

        Ok(ListResult::new(items))
    }
}

fn matches_selector(item: &DaemonSetItem, selector: &str) -> bool {
    selector.split(',').all(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        item.labels.get(key).map(String::as_str) == Some(value)
    })
}

fn test_item(name: &str, app: &str, desired: u64, ready: u64, warnings: usize) -> DaemonSetItem {
    DaemonSetItem {
        uid: format!("_{name}_"),
        name: name.to_owned(),
        namespace: Some("default".to_owned()),
        labels: [("app".to_owned(), app.to_owned())].into(),
        pod_info: PodInfo::new(desired, desired, ready, vec![WarningEvent::default(); warnings]),
        ..Default::default()
    }
}

fn test_items() -> Vec<DaemonSetItem> {
    vec![test_item("first", "a", 3, 3, 0), test_item("second", "b", 5, 2, 1)]
}

fn single_namespace_session() -> SessionSelection {
    SessionSelection::new(NamespaceSelector::from("default"))
}

#[tokio::test]
async fn refresh_replaces_collection_test() {
    let mut view = daemon_set_view(StubService::new(test_items()), single_namespace_session());

    view.refresh(ListParams::default()).await;
    assert_eq!(2, view.items().len());
    assert_eq!(8, view.stats().desired);
    assert_eq!(3, view.stats().pending);
    assert_eq!(1, view.stats().warnings);

    view.refresh(ListParams::default().labels("app=a")).await;
    assert_eq!(1, view.items().len());
    assert_eq!("first", view.items()[0].name);
    assert_eq!(3, view.stats().desired);
    assert_eq!(0, view.stats().warnings);
}

#[tokio::test]
async fn label_selector_is_passed_through_test() {
    let service = StubService::new(test_items());
    let last_params = Arc::clone(&service.last_params);
    let mut view = daemon_set_view(service, single_namespace_session());

    view.refresh(ListParams::default().labels("app=a")).await;

    let params = last_params.lock().unwrap().clone().unwrap();
    assert_eq!(Some("app=a"), params.label_selector.as_deref());
}

#[tokio::test]
async fn failed_refresh_keeps_prior_collection_test() {
    let service = StubService::new(test_items());
    let fail = Arc::clone(&service.fail);
    let (sink, mut messages) = crate::notifications::NotificationSink::channel();
    let mut view = daemon_set_view(service, single_namespace_session()).with_notifications(sink);

    view.refresh(ListParams::default()).await;
    assert_eq!(2, view.items().len());
    assert!(view.error().is_none());

    fail.store(true, Ordering::Relaxed);
    view.refresh(ListParams::default()).await;

    assert_eq!(2, view.items().len());
    assert!(view.error().is_some());

    let message = messages.try_recv().unwrap();
    assert_eq!(NotificationKind::Error, message.kind);
    assert!(message.text.contains("Cannot fetch resource list"));
}

#[test]
fn stale_fetch_result_is_discarded_test() {
    let mut view = daemon_set_view(StubService::new(Vec::new()), single_namespace_session());

    let stale = view.begin_refresh();
    let current = view.begin_refresh();

    view.apply_result(stale, Ok(ListResult::new(vec![test_item("stale", "a", 1, 1, 0)])));
    assert!(view.items().is_empty());

    view.apply_result(current, Ok(ListResult::new(test_items())));
    assert_eq!(2, view.items().len());

    view.apply_result(stale, Ok(ListResult::new(vec![test_item("stale", "a", 1, 1, 0)])));
    assert_eq!(2, view.items().len());
}

#[test]
fn namespace_column_follows_session_test() {
    let session = single_namespace_session();
    let view = daemon_set_view(StubService::new(Vec::new()), session.clone());

    assert!(!view.display_columns().contains(&column::NAMESPACE_ID));

    session.set(NamespaceSelector::from("default,kube-system"));
    let columns = view.display_columns();
    assert!(columns.contains(&column::NAMESPACE_ID));
    assert_eq!(
        vec![
            column::STATUS_ICON_ID,
            column::NAMESPACE_ID,
            column::NAME_ID,
            column::LABELS_ID,
            column::PODS_ID,
            column::CREATED_ID,
            column::IMAGES_ID,
            column::MENU_ID,
        ],
        columns
    );

    session.set(NamespaceSelector::from("default"));
    assert!(!view.display_columns().contains(&column::NAMESPACE_ID));
}

#[test]
fn status_icon_resolution_test() {
    let view = daemon_set_view(StubService::new(Vec::new()), single_namespace_session());

    let binding = view.status_of(&test_item("bad", "a", 1, 0, 1)).unwrap();
    assert_eq!('✖', binding.icon);
    assert_eq!("error", binding.style);

    let binding = view.status_of(&test_item("rolling", "a", 3, 1, 0)).unwrap();
    assert_eq!('◷', binding.icon);
    assert_eq!("muted", binding.style);

    let binding = view.status_of(&test_item("ok", "a", 3, 3, 0)).unwrap();
    assert_eq!('✔', binding.icon);
    assert_eq!("success", binding.style);
}

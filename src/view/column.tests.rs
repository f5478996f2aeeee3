use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;

#[test]
fn base_columns_only_test() {
    let registry = ColumnRegistry::new([STATUS_ICON, NAME, LABELS, PODS, CREATED, IMAGES]);

    assert_eq!(
        vec![STATUS_ICON_ID, NAME_ID, LABELS_ID, PODS_ID, CREATED_ID, IMAGES_ID],
        registry.display_columns()
    );
}

#[test]
fn action_column_is_always_last_test() {
    let mut registry = ColumnRegistry::new([STATUS_ICON, NAME]);
    registry.register_action_column(MENU);
    registry.register_dynamic_column(NAMESPACE, NAME_ID, || true);

    assert_eq!(vec![STATUS_ICON_ID, NAMESPACE_ID, NAME_ID, MENU_ID], registry.display_columns());
}

#[test]
fn dynamic_column_visibility_test() {
    let visible = Arc::new(AtomicBool::new(false));
    let predicate = Arc::clone(&visible);

    let mut registry = ColumnRegistry::new([STATUS_ICON, NAME]);
    registry.register_dynamic_column(NAMESPACE, NAME_ID, move || predicate.load(Ordering::Relaxed));

    assert!(!registry.display_columns().contains(&NAMESPACE_ID));

    visible.store(true, Ordering::Relaxed);
    assert!(registry.display_columns().contains(&NAMESPACE_ID));

    visible.store(false, Ordering::Relaxed);
    assert!(!registry.display_columns().contains(&NAMESPACE_ID));
}

#[test]
fn dynamic_column_unknown_anchor_test() {
    let mut registry = ColumnRegistry::new([STATUS_ICON, NAME]);
    registry.register_action_column(MENU);
    registry.register_dynamic_column(NAMESPACE, "missing", || true);

    assert_eq!(vec![STATUS_ICON_ID, NAME_ID, NAMESPACE_ID, MENU_ID], registry.display_columns());
}

#[cfg(test)]
#[path = "./column.tests.rs"]
mod column_tests;

pub const STATUS_ICON_ID: &str = "statusicon";
pub const NAME_ID: &str = "name";
pub const LABELS_ID: &str = "labels";
pub const PODS_ID: &str = "pods";
pub const CREATED_ID: &str = "created";
pub const IMAGES_ID: &str = "images";
pub const NAMESPACE_ID: &str = "namespace";
pub const MENU_ID: &str = "menu";

/// Default `STATUS` column.
pub const STATUS_ICON: Column = Column {
    id: STATUS_ICON_ID,
    title: "",
};

/// Default `NAME` column.
pub const NAME: Column = Column {
    id: NAME_ID,
    title: "NAME",
};

/// Default `LABELS` column.
pub const LABELS: Column = Column {
    id: LABELS_ID,
    title: "LABELS",
};

/// Default `PODS` column.
pub const PODS: Column = Column {
    id: PODS_ID,
    title: "PODS",
};

/// Default `CREATED` column.
pub const CREATED: Column = Column {
    id: CREATED_ID,
    title: "CREATED",
};

/// Default `IMAGES` column.
pub const IMAGES: Column = Column {
    id: IMAGES_ID,
    title: "IMAGES",
};

/// Default `NAMESPACE` column.
pub const NAMESPACE: Column = Column {
    id: NAMESPACE_ID,
    title: "NAMESPACE",
};

/// Default action column for per-row operations.
pub const MENU: Column = Column {
    id: MENU_ID,
    title: "",
};

/// One displayable table column, immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub title: &'static str,
}

struct DynamicColumn {
    column: Column,
    before: &'static str,
    predicate: Box<dyn Fn() -> bool + Send>,
}

/// Ordered set of base, action and conditionally visible columns for one view.
/// Registration happens once at construction time; visibility predicates of
/// dynamic columns are re-evaluated on every [`ColumnRegistry::display_columns`] call.
#[derive(Default)]
pub struct ColumnRegistry {
    base: Vec<Column>,
    action: Vec<Column>,
    dynamic: Vec<DynamicColumn>,
}

impl ColumnRegistry {
    /// Creates new [`ColumnRegistry`] instance with the provided base columns.
    pub fn new(base: impl Into<Vec<Column>>) -> Self {
        Self {
            base: base.into(),
            action: Vec::new(),
            dynamic: Vec::new(),
        }
    }

    /// Registers an always-present action column, appended after all data columns.
    pub fn register_action_column(&mut self, column: Column) {
        self.action.push(column);
    }

    /// Registers a column inserted before the `before` column
    /// only when the provided predicate holds at render time.
    pub fn register_dynamic_column(&mut self, column: Column, before: &'static str, predicate: impl Fn() -> bool + Send + 'static) {
        self.dynamic.push(DynamicColumn {
            column,
            before,
            predicate: Box::new(predicate),
        });
    }

    /// Returns descriptors of all currently visible columns, in display order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        let mut columns = self.base.iter().collect::<Vec<_>>();
        for dynamic in &self.dynamic {
            if (dynamic.predicate)() {
                let position = columns
                    .iter()
                    .position(|c| c.id == dynamic.before)
                    .unwrap_or(columns.len());
                columns.insert(position, &dynamic.column);
            }
        }

        columns.extend(self.action.iter());
        columns
    }

    /// Returns identifiers of all currently visible columns, in display order.
    pub fn display_columns(&self) -> Vec<&'static str> {
        self.visible_columns().iter().map(|c| c.id).collect()
    }
}

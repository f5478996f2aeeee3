use std::fmt::Display;
use std::sync::{Arc, RwLock};

#[cfg(test)]
#[path = "./namespace.tests.rs"]
mod namespace_tests;

pub const ALL_NAMESPACES: &str = "all";

/// Represents the set of kubernetes namespaces selected for a view.
/// **Note** that it treats string `all` as a special case: all namespaces.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct NamespaceSelector {
    values: Vec<String>,
}

impl NamespaceSelector {
    /// Creates new [`NamespaceSelector`] instance that represents all namespaces.
    pub fn all() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates new [`NamespaceSelector`] instance from a comma separated list of namespaces.
    pub fn from(value: &str) -> Self {
        let values = value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();

        if values.iter().any(|v| v == ALL_NAMESPACES) {
            Self::all()
        } else {
            Self { values }
        }
    }

    /// Returns `true` if the [`NamespaceSelector`] instance represents all namespaces.
    #[inline]
    pub fn is_all(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the selection spans more than one namespace.
    #[inline]
    pub fn is_multiple(&self) -> bool {
        self.is_all() || self.values.len() > 1
    }

    /// Provides the selection as an option when it names exactly one namespace.
    #[inline]
    pub fn as_single(&self) -> Option<&str> {
        if self.values.len() == 1 {
            Some(self.values[0].as_str())
        } else {
            None
        }
    }

    /// Returns `true` if the provided namespace belongs to the selection.
    pub fn contains(&self, namespace: &str) -> bool {
        self.is_all() || self.values.iter().any(|v| v == namespace)
    }
}

impl Display for NamespaceSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_all() {
            write!(f, "/ALL/")
        } else {
            write!(f, "'{}'", self.values.join(","))
        }
    }
}

/// Shared, session scoped namespace selection that column visibility
/// predicates query at render time.
#[derive(Default, Clone)]
pub struct SessionSelection {
    inner: Arc<RwLock<NamespaceSelector>>,
}

impl SessionSelection {
    /// Creates new [`SessionSelection`] instance.
    pub fn new(selector: NamespaceSelector) -> Self {
        Self {
            inner: Arc::new(RwLock::new(selector)),
        }
    }

    /// Replaces the current namespace selection.
    pub fn set(&self, selector: NamespaceSelector) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = selector;
        }
    }

    /// Returns a snapshot of the current namespace selection.
    pub fn get(&self) -> NamespaceSelector {
        self.inner.read().map(|inner| inner.clone()).unwrap_or_default()
    }

    /// Returns `true` if the current selection spans more than one namespace.
    pub fn is_multiple(&self) -> bool {
        self.inner.read().map(|inner| inner.is_multiple()).unwrap_or_default()
    }
}

#![forbid(unsafe_code)]

//! Immutable namespaced string catalog for a single locale.
//!
//! # Invariants
//!
//! 1. **Unique pairs**: every `(namespace, key)` maps to exactly one
//!    [`Template`]. Duplicates are rejected by [`CatalogBuilder::build`].
//! 2. **Non-empty names**: no namespace or key is the empty string.
//! 3. **Frozen**: a `Catalog` has no mutating methods; share it behind `Arc`.
//! 4. **Sorted storage**: entries are held in one flat table ordered by
//!    `(namespace, key)`, so iteration order is deterministic and lookups
//!    are a binary search without allocation.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Duplicate pair | Same `(namespace, key)` inserted twice | `build()` returns `DuplicateKey` |
//! | Empty namespace | `""` namespace | `build()` returns `EmptyNamespace` |
//! | Empty key | `""` key | `build()` returns `EmptyKey` |
//! | Missing pair | Lookup of an absent pair | `get()` returns `None` |

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::I18nError;
use crate::template::Template;

/// One row of the flat table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    namespace: Box<str>,
    key: Box<str>,
    template: Template,
}

impl Entry {
    fn cmp_pair(&self, namespace: &str, key: &str) -> Ordering {
        (&*self.namespace, &*self.key).cmp(&(namespace, key))
    }
}

/// Compile-time catalog literal: `[(namespace, [(key, template)])]`.
pub type StaticCatalog = [(&'static str, &'static [(&'static str, &'static str)])];

/// Translations for one locale.
///
/// # Example
///
/// ```
/// use console_i18n::catalog::Catalog;
///
/// let catalog = Catalog::builder()
///     .namespace("Common", [("ok", "确定"), ("cancel", "取消")])
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.get("Common", "ok").map(|t| t.as_str()), Some("确定"));
/// assert!(catalog.get("Common", "missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Build from a compiled-in literal table.
    pub fn from_static(table: &StaticCatalog) -> Result<Self, I18nError> {
        let mut builder = CatalogBuilder::new();
        for &(namespace, keys) in table {
            builder = builder.namespace(namespace, keys.iter().copied());
        }
        builder.build()
    }

    /// Look up a template by namespace and key.
    #[must_use]
    pub fn get(&self, namespace: &str, key: &str) -> Option<&Template> {
        self.entries
            .binary_search_by(|entry| entry.cmp_pair(namespace, key))
            .ok()
            .map(|idx| &self.entries[idx].template)
    }

    /// Whether the pair is present.
    #[must_use]
    pub fn contains(&self, namespace: &str, key: &str) -> bool {
        self.get(namespace, key).is_some()
    }

    /// Number of `(namespace, key)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct namespaces, sorted.
    #[must_use]
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| &*e.namespace).collect();
        names.dedup();
        names
    }

    /// Keys of one namespace, sorted. Empty if the namespace is unknown.
    #[must_use]
    pub fn keys(&self, namespace: &str) -> Vec<&str> {
        let start = self
            .entries
            .partition_point(|entry| &*entry.namespace < namespace);
        self.entries[start..]
            .iter()
            .take_while(|entry| &*entry.namespace == namespace)
            .map(|entry| &*entry.key)
            .collect()
    }

    /// All `(namespace, key, template)` triples in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Template)> {
        self.entries
            .iter()
            .map(|entry| (&*entry.namespace, &*entry.key, &entry.template))
    }

    /// All `(namespace, key)` pairs in sorted order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (&*entry.namespace, &*entry.key))
    }
}

/// Accumulates entries and validates them into a [`Catalog`].
///
/// Every insertion is kept until [`build`](Self::build), so a pair authored
/// twice is reported instead of silently overwritten.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    raw: Vec<(String, String, String)>,
}

impl CatalogBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry.
    #[must_use]
    pub fn insert(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.push(namespace, key, template);
        self
    }

    /// Add one entry through a mutable reference.
    pub fn push(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.raw
            .push((namespace.into(), key.into(), template.into()));
    }

    /// Add every `(key, template)` pair of one namespace.
    #[must_use]
    pub fn namespace<I, K, V>(mut self, namespace: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, template) in entries {
            self.push(namespace, key, template);
        }
        self
    }

    /// Entries pushed so far, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether nothing has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Validate and freeze.
    ///
    /// Errors are reported in insertion order: the first empty name or the
    /// second occurrence of a duplicated pair.
    pub fn build(self) -> Result<Catalog, I18nError> {
        {
            let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(self.raw.len());
            for (namespace, key, _) in &self.raw {
                if namespace.is_empty() {
                    return Err(I18nError::EmptyNamespace);
                }
                if key.is_empty() {
                    return Err(I18nError::EmptyKey {
                        namespace: namespace.clone(),
                    });
                }
                if !seen.insert((namespace.as_str(), key.as_str())) {
                    return Err(I18nError::DuplicateKey {
                        namespace: namespace.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        let mut entries: Vec<Entry> = self
            .raw
            .into_iter()
            .map(|(namespace, key, template)| Entry {
                namespace: namespace.into_boxed_str(),
                key: key.into_boxed_str(),
                template: Template::new(template),
            })
            .collect();
        entries.sort_unstable_by(|a, b| (&a.namespace, &a.key).cmp(&(&b.namespace, &b.key)));

        let catalog = Catalog { entries };
        tracing::debug!(
            entries = catalog.len(),
            namespaces = catalog.namespaces().len(),
            "catalog built"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> Catalog {
        Catalog::builder()
            .namespace("Common", [("ok", "确定"), ("cancel", "取消")])
            .namespace("StorageView", [("nodeStatus", "节点状态")])
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_present_pair() {
        let catalog = common();
        assert_eq!(catalog.get("Common", "ok").unwrap().as_str(), "确定");
        assert_eq!(
            catalog.get("StorageView", "nodeStatus").unwrap().as_str(),
            "节点状态"
        );
    }

    #[test]
    fn lookup_is_namespace_scoped() {
        let catalog = common();
        assert!(catalog.get("StorageView", "ok").is_none());
        assert!(catalog.get("Common", "nodeStatus").is_none());
        assert!(catalog.get("Unknown", "ok").is_none());
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let err = Catalog::builder()
            .insert("Common", "ok", "确定")
            .insert("Common", "cancel", "取消")
            .insert("Common", "ok", "好")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            I18nError::DuplicateKey {
                namespace: "Common".into(),
                key: "ok".into()
            }
        );
    }

    #[test]
    fn same_key_in_different_namespaces_is_fine() {
        let catalog = Catalog::builder()
            .insert("DatabaseView", "name", "名称")
            .insert("StorageView", "name", "集群名(Namespace)")
            .build()
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("DatabaseView", "name").unwrap().as_str(), "名称");
    }

    #[test]
    fn empty_names_are_rejected() {
        assert_eq!(
            Catalog::builder().insert("", "ok", "x").build().unwrap_err(),
            I18nError::EmptyNamespace
        );
        assert_eq!(
            Catalog::builder().insert("Common", "", "x").build().unwrap_err(),
            I18nError::EmptyKey {
                namespace: "Common".into()
            }
        );
    }

    #[test]
    fn empty_template_is_allowed() {
        let catalog = Catalog::builder().insert("Common", "blank", "").build().unwrap();
        assert_eq!(catalog.get("Common", "blank").unwrap().as_str(), "");
    }

    #[test]
    fn keys_with_spaces_and_digits() {
        let catalog = Catalog::builder()
            .insert("SiderMenu", "Log View", "日志")
            .insert("TimePicker", "10s", "10秒")
            .build()
            .unwrap();
        assert_eq!(catalog.get("SiderMenu", "Log View").unwrap().as_str(), "日志");
        assert_eq!(catalog.get("TimePicker", "10s").unwrap().as_str(), "10秒");
    }

    #[test]
    fn namespaces_and_keys_are_sorted() {
        let catalog = common();
        assert_eq!(catalog.namespaces(), vec!["Common", "StorageView"]);
        assert_eq!(catalog.keys("Common"), vec!["cancel", "ok"]);
        assert!(catalog.keys("Nope").is_empty());
    }

    #[test]
    fn entries_iterate_in_pair_order() {
        let catalog = common();
        let pairs: Vec<(&str, &str)> = catalog.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("Common", "cancel"),
                ("Common", "ok"),
                ("StorageView", "nodeStatus")
            ]
        );
        assert_eq!(catalog.entries().count(), 3);
    }

    #[test]
    fn from_static_table() {
        static TABLE: &StaticCatalog = &[
            ("Common", &[("ok", "确定"), ("loading", "加载中")]),
            ("CapacityView", &[("total", "总量")]),
        ];
        let catalog = Catalog::from_static(TABLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("CapacityView", "total"));
    }

    #[test]
    fn from_static_detects_duplicates() {
        static TABLE: &StaticCatalog = &[("Common", &[("ok", "确定"), ("ok", "好的")])];
        assert!(matches!(
            Catalog::from_static(TABLE),
            Err(I18nError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.namespaces().is_empty());
        assert!(catalog.get("Common", "ok").is_none());
    }

    #[test]
    fn catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}

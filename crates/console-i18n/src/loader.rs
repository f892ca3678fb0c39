#![forbid(unsafe_code)]

//! JSON catalogs in the console's nested-object shape.
//!
//! ```json
//! { "Common": { "ok": "确定", "cancel": "取消" } }
//! ```
//!
//! Namespaces must be objects and templates must be strings. Decoding keeps
//! every member in source order, so a key written twice in the same
//! namespace object reaches [`CatalogBuilder::build`] and is rejected as
//! `DuplicateKey` instead of being silently overwritten. A namespace object
//! written twice is merged.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{Catalog, CatalogBuilder};
use crate::error::I18nError;

/// Decoded `namespace -> key -> template` entries, duplicates kept.
struct NestedEntries(CatalogBuilder);

impl<'de> Deserialize<'de> for NestedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NestedVisitor)
    }
}

struct NestedVisitor;

impl<'de> Visitor<'de> for NestedVisitor {
    type Value = NestedEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of namespaces")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut builder = CatalogBuilder::new();
        while let Some(namespace) = map.next_key::<String>()? {
            let NamespaceEntries(entries) = map.next_value()?;
            for (key, template) in entries {
                builder.push(namespace.as_str(), key, template);
            }
        }
        Ok(NestedEntries(builder))
    }
}

struct NamespaceEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for NamespaceEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NamespaceVisitor)
    }
}

struct NamespaceVisitor;

impl<'de> Visitor<'de> for NamespaceVisitor {
    type Value = NamespaceEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of key to template strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, template)) = map.next_entry::<String, String>()? {
            entries.push((key, template));
        }
        Ok(NamespaceEntries(entries))
    }
}

impl Catalog {
    /// Decode a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let NestedEntries(builder) =
            serde_json::from_str(json).map_err(|err| I18nError::Parse(err.to_string()))?;
        builder.build()
    }

    /// Decode a catalog from an already-parsed JSON value.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, I18nError> {
        let NestedEntries(builder) =
            NestedEntries::deserialize(value).map_err(|err| I18nError::Parse(err.to_string()))?;
        builder.build()
    }

    /// Export in the nested shape; namespaces and keys sorted.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        for (namespace, key, template) in self.entries() {
            let slot = root
                .entry(namespace)
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if let serde_json::Value::Object(keys) = slot {
                keys.insert(
                    key.to_string(),
                    serde_json::Value::String(template.as_str().to_string()),
                );
            }
        }
        serde_json::Value::Object(root)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let namespaces = self.namespaces();
        let mut map = serializer.serialize_map(Some(namespaces.len()))?;
        for namespace in namespaces {
            map.serialize_entry(namespace, &NamespaceView {
                catalog: self,
                namespace,
            })?;
        }
        map.end()
    }
}

struct NamespaceView<'a> {
    catalog: &'a Catalog,
    namespace: &'a str,
}

impl Serialize for NamespaceView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keys = self.catalog.keys(self.namespace);
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            if let Some(template) = self.catalog.get(self.namespace, key) {
                map.serialize_entry(key, template.as_str())?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let NestedEntries(builder) = NestedEntries::deserialize(deserializer)?;
        builder.build().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_nested_object() {
        let catalog = Catalog::from_json_str(
            r#"{
                "Common": { "ok": "确定", "cancel": "取消" },
                "SiderMenu": { "Log View": "日志" }
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("SiderMenu", "Log View").unwrap().as_str(), "日志");
    }

    #[test]
    fn duplicate_key_in_json_text_is_rejected() {
        let err = Catalog::from_json_str(r#"{ "Common": { "ok": "确定", "ok": "好" } }"#)
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
    fn repeated_namespace_objects_merge() {
        let catalog = Catalog::from_json_str(
            r#"{ "Common": { "ok": "确定" }, "Common": { "cancel": "取消" } }"#,
        )
        .unwrap();
        assert_eq!(catalog.keys("Common"), vec!["cancel", "ok"]);
    }

    #[test]
    fn non_string_template_is_a_parse_error() {
        let err = Catalog::from_json_str(r#"{ "Common": { "ok": 1 } }"#).unwrap_err();
        assert!(matches!(err, I18nError::Parse(_)), "{err:?}");
    }

    #[test]
    fn non_object_namespace_is_a_parse_error() {
        let err = Catalog::from_json_str(r#"{ "Common": "ok" }"#).unwrap_err();
        assert!(matches!(err, I18nError::Parse(_)), "{err:?}");
        let err = Catalog::from_json_str("[]").unwrap_err();
        assert!(matches!(err, I18nError::Parse(_)), "{err:?}");
    }

    #[test]
    fn empty_key_in_json_is_rejected() {
        let err = Catalog::from_json_str(r#"{ "Common": { "": "x" } }"#).unwrap_err();
        assert_eq!(
            err,
            I18nError::EmptyKey {
                namespace: "Common".into()
            }
        );
    }

    #[test]
    fn export_matches_value_and_serializer() {
        let catalog = Catalog::builder()
            .insert("Common", "ok", "确定")
            .insert("CapacityView", "free", "空闲")
            .build()
            .unwrap();
        let value = catalog.to_json_value();
        assert_eq!(
            value,
            serde_json::json!({
                "CapacityView": { "free": "空闲" },
                "Common": { "ok": "确定" }
            })
        );
        assert_eq!(serde_json::to_value(&catalog).unwrap(), value);
        assert_eq!(Catalog::from_json_value(&value).unwrap(), catalog);
    }

    #[test]
    fn deserialize_through_serde_json() {
        let catalog: Catalog = serde_json::from_str(r#"{ "Common": { "ok": "OK" } }"#).unwrap();
        assert!(catalog.contains("Common", "ok"));
        let dup: Result<Catalog, _> =
            serde_json::from_str(r#"{ "Common": { "ok": "OK", "ok": "Okay" } }"#);
        assert!(dup.is_err());
    }
}

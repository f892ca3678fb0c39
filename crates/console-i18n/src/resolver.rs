#![forbid(unsafe_code)]

//! Key resolution with fallback and placeholder substitution.
//!
//! # Invariants
//!
//! 1. **Fixed chain**: a lookup tries the active catalog, then the fallback
//!    catalog, then degrades to the `namespace.key` placeholder. The chain is
//!    walked exactly once per call.
//! 2. **Never fails**: `resolve` and `resolve_with` always return a
//!    non-empty string for non-empty input; only an explicitly requested,
//!    unregistered locale (`resolve_in`) is an error.
//! 3. **Referentially transparent**: for an unchanged registry, identical
//!    arguments give identical output. Miss counters are the only side effect.
//! 4. **One snapshot per call**: active and fallback catalogs come from a
//!    single [`RegistrySnapshot`], so a concurrent locale switch is seen
//!    entirely or not at all.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::I18nError;
use crate::registry::{CatalogRegistry, RegistrySnapshot};
use crate::template::{Params, Template};

/// Where a lookup found its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Found in the active (or explicitly requested) locale.
    Active(&'a Template),
    /// Found only in the fallback locale.
    Fallback(&'a Template),
    /// Found nowhere.
    Missing,
}

impl<'a> Resolution<'a> {
    /// The template found, if any.
    #[must_use]
    pub fn template(&self) -> Option<&'a Template> {
        match self {
            Self::Active(t) | Self::Fallback(t) => Some(*t),
            Self::Missing => None,
        }
    }

    /// Whether no catalog provided the pair.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Text shown for a pair no catalog provides.
#[must_use]
pub fn missing_placeholder(namespace: &str, key: &str) -> String {
    format!("{namespace}.{key}")
}

/// Distinct missing pairs remembered for [`MissingStats::missing_keys`].
///
/// Misses beyond this are still counted but no longer listed or warned
/// about individually.
pub const MAX_TRACKED_MISSING: usize = 1024;

/// Snapshot of missing-translation counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MissingStats {
    /// Lookups that degraded to the placeholder.
    pub misses: u64,
    /// Lookups served by the fallback catalog.
    pub fallback_hits: u64,
    /// Distinct missing pairs as `namespace.key`, sorted. Holds at most
    /// [`MAX_TRACKED_MISSING`] entries.
    pub missing_keys: Vec<String>,
}

#[derive(Debug, Default)]
struct MissingTranslations {
    misses: AtomicU64,
    fallback_hits: AtomicU64,
    seen: Mutex<BTreeSet<(String, String)>>,
}

impl MissingTranslations {
    fn record_fallback(&self, locale: &str, namespace: &str, key: &str) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(locale, namespace, key, "translation served by fallback");
    }

    fn record_miss(&self, locale: &str, namespace: &str, key: &str) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        let first = {
            let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
            if seen.len() < MAX_TRACKED_MISSING {
                seen.insert((namespace.to_string(), key.to_string()))
            } else {
                false
            }
        };
        if first {
            tracing::warn!(locale, namespace, key, "missing translation");
        } else {
            tracing::debug!(locale, namespace, key, "missing translation");
        }
    }

    fn snapshot(&self) -> MissingStats {
        let seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        MissingStats {
            misses: self.misses.load(Ordering::Relaxed),
            fallback_hits: self.fallback_hits.load(Ordering::Relaxed),
            missing_keys: seen
                .iter()
                .map(|(namespace, key)| missing_placeholder(namespace, key))
                .collect(),
        }
    }

    fn reset(&self) {
        self.misses.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// UI-facing entry point: `(namespace, key, params)` to display text.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use console_i18n::catalog::Catalog;
/// use console_i18n::registry::CatalogRegistry;
/// use console_i18n::resolver::Resolver;
/// use console_i18n::template::Params;
///
/// let zh = Catalog::builder()
///     .namespace("Common", [("ok", "确定"), ("cancel", "取消")])
///     .build()
///     .unwrap();
/// let resolver = Resolver::new(Arc::new(CatalogRegistry::new("zh-CN", zh).unwrap()));
///
/// assert_eq!(resolver.resolve("Common", "ok"), "确定");
/// assert!(resolver.resolve("Common", "missingKey").contains("missingKey"));
/// assert_eq!(resolver.resolve_with("Common", "ok", &Params::from([("unused", "x")])), "确定");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Arc<CatalogRegistry>,
    missing: Arc<MissingTranslations>,
}

impl Resolver {
    /// Resolver over `registry` with fresh miss counters.
    #[must_use]
    pub fn new(registry: Arc<CatalogRegistry>) -> Self {
        Self {
            registry,
            missing: Arc::new(MissingTranslations::default()),
        }
    }

    /// The shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<CatalogRegistry> {
        &self.registry
    }

    /// Active locale id.
    #[must_use]
    pub fn active_locale(&self) -> String {
        self.registry.active()
    }

    /// Switch the active locale. On error the active locale is unchanged.
    pub fn switch_locale(&self, locale: &str) -> Result<(), I18nError> {
        self.registry.set_active(locale)
    }

    /// Resolve without parameters.
    #[must_use]
    pub fn resolve(&self, namespace: &str, key: &str) -> String {
        self.resolve_with(namespace, key, &Params::new())
    }

    /// Resolve in the active locale and substitute `params`.
    #[must_use]
    pub fn resolve_with(&self, namespace: &str, key: &str, params: &Params<'_>) -> String {
        let snapshot = self.registry.snapshot();
        self.resolve_from(&snapshot, namespace, key, params)
    }

    /// Resolve in an explicitly requested locale.
    ///
    /// Fails only when `locale` was never registered; other misses degrade
    /// the same way as [`resolve_with`](Self::resolve_with).
    pub fn resolve_in(
        &self,
        locale: &str,
        namespace: &str,
        key: &str,
        params: &Params<'_>,
    ) -> Result<String, I18nError> {
        let snapshot = self.registry.snapshot_for(locale)?;
        Ok(self.resolve_from(&snapshot, namespace, key, params))
    }

    /// Find the template for a pair without rendering or recording misses.
    #[must_use]
    pub fn lookup<'s>(
        snapshot: &'s RegistrySnapshot,
        namespace: &str,
        key: &str,
    ) -> Resolution<'s> {
        if let Some(template) = snapshot.active.get(namespace, key) {
            return Resolution::Active(template);
        }
        if !snapshot.active_is_fallback() {
            if let Some(template) = snapshot.fallback.get(namespace, key) {
                return Resolution::Fallback(template);
            }
        }
        Resolution::Missing
    }

    /// Resolve against a snapshot the caller already holds.
    ///
    /// Misses and fallback hits are recorded as for
    /// [`resolve_with`](Self::resolve_with).
    #[must_use]
    pub fn resolve_from(
        &self,
        snapshot: &RegistrySnapshot,
        namespace: &str,
        key: &str,
        params: &Params<'_>,
    ) -> String {
        let locale = &*snapshot.active_locale;
        match Self::lookup(snapshot, namespace, key) {
            Resolution::Active(template) => template.render(params),
            Resolution::Fallback(template) => {
                self.missing.record_fallback(locale, namespace, key);
                template.render(params)
            }
            Resolution::Missing => {
                self.missing.record_miss(locale, namespace, key);
                missing_placeholder(namespace, key)
            }
        }
    }

    /// Counters for fallback hits and missing translations.
    #[must_use]
    pub fn missing_stats(&self) -> MissingStats {
        self.missing.snapshot()
    }

    /// Zero the miss counters and forget tracked pairs.
    pub fn reset_missing_stats(&self) {
        self.missing.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn resolver() -> Resolver {
        let en = Catalog::builder()
            .namespace(
                "Common",
                [("ok", "OK"), ("cancel", "Cancel"), ("loading", "Loading")],
            )
            .insert(
                "MetadataDatabaseView",
                "deleteConfirm",
                "Delete database [ {name} ] ?",
            )
            .build()
            .unwrap();
        let zh = Catalog::builder()
            .namespace("Common", [("ok", "确定"), ("cancel", "取消")])
            .insert(
                "MetadataDatabaseView",
                "deleteConfirm",
                "您确认要删除数据库 [ {name} ] ?",
            )
            .build()
            .unwrap();
        let registry = CatalogRegistry::new("en-US", en).unwrap();
        registry.register("zh-CN", zh).unwrap();
        registry.set_active("zh-CN").unwrap();
        Resolver::new(Arc::new(registry))
    }

    #[test]
    fn active_hit() {
        let r = resolver();
        assert_eq!(r.resolve("Common", "ok"), "确定");
        assert_eq!(r.missing_stats(), MissingStats::default());
    }

    #[test]
    fn fallback_hit() {
        let r = resolver();
        assert_eq!(r.resolve("Common", "loading"), "Loading");
        let stats = r.missing_stats();
        assert_eq!(stats.fallback_hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn missing_everywhere_yields_key_placeholder() {
        let r = resolver();
        let text = r.resolve("Common", "missingKey");
        assert_eq!(text, "Common.missingKey");
        assert!(text.contains("missingKey"));
    }

    #[test]
    fn misses_are_counted_and_deduplicated() {
        let r = resolver();
        let _ = r.resolve("Common", "missingKey");
        let _ = r.resolve("Common", "missingKey");
        let _ = r.resolve("Other", "gone");
        let stats = r.missing_stats();
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.missing_keys, vec!["Common.missingKey", "Other.gone"]);

        r.reset_missing_stats();
        assert_eq!(r.missing_stats(), MissingStats::default());
    }

    #[test]
    fn tracked_missing_pairs_are_capped() {
        let r = resolver();
        let total = MAX_TRACKED_MISSING + 10;
        for i in 0..total {
            let _ = r.resolve("Dynamic", &format!("key{i}"));
        }
        let stats = r.missing_stats();
        assert_eq!(stats.misses, total as u64);
        assert_eq!(stats.missing_keys.len(), MAX_TRACKED_MISSING);
    }

    #[test]
    fn params_are_substituted() {
        let r = resolver();
        let params = Params::from([("name", "metrics")]);
        assert_eq!(
            r.resolve_with("MetadataDatabaseView", "deleteConfirm", &params),
            "您确认要删除数据库 [ metrics ] ?"
        );
    }

    #[test]
    fn unmatched_placeholder_stays_verbatim() {
        let r = resolver();
        assert_eq!(
            r.resolve("MetadataDatabaseView", "deleteConfirm"),
            "您确认要删除数据库 [ {name} ] ?"
        );
    }

    #[test]
    fn extra_params_are_ignored() {
        let r = resolver();
        let params = Params::from([("unused", "x")]);
        assert_eq!(r.resolve_with("Common", "ok", &params), "确定");
    }

    #[test]
    fn switch_locale_changes_output() {
        let r = resolver();
        r.switch_locale("en-US").unwrap();
        assert_eq!(r.active_locale(), "en-US");
        assert_eq!(r.resolve("Common", "ok"), "OK");
    }

    #[test]
    fn switch_to_unknown_locale_is_rejected() {
        let r = resolver();
        let err = r.switch_locale("fr-FR").unwrap_err();
        assert_eq!(err, I18nError::UnknownLocale("fr-FR".into()));
        assert_eq!(r.active_locale(), "zh-CN");
        assert_eq!(r.resolve("Common", "ok"), "确定");
    }

    #[test]
    fn resolve_in_explicit_locale() {
        let r = resolver();
        let none = Params::new();
        assert_eq!(r.resolve_in("en-US", "Common", "cancel", &none).unwrap(), "Cancel");
        assert_eq!(
            r.resolve_in("zh-CN", "Common", "loading", &none).unwrap(),
            "Loading"
        );
        assert_eq!(
            r.resolve_in("de-DE", "Common", "ok", &none).unwrap_err(),
            I18nError::UnknownLocale("de-DE".into())
        );
        // The active locale is untouched by explicit requests.
        assert_eq!(r.active_locale(), "zh-CN");
    }

    #[test]
    fn lookup_reports_source() {
        let r = resolver();
        let snapshot = r.registry().snapshot();
        assert!(matches!(
            Resolver::lookup(&snapshot, "Common", "ok"),
            Resolution::Active(t) if t.as_str() == "确定"
        ));
        assert!(matches!(
            Resolver::lookup(&snapshot, "Common", "loading"),
            Resolution::Fallback(t) if t.as_str() == "Loading"
        ));
        assert!(Resolver::lookup(&snapshot, "Common", "nope").is_missing());
    }

    #[test]
    fn resolution_is_idempotent() {
        let r = resolver();
        let params = Params::from([("name", "db")]);
        let first = r.resolve_with("MetadataDatabaseView", "deleteConfirm", &params);
        let second = r.resolve_with("MetadataDatabaseView", "deleteConfirm", &params);
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_from_uses_the_given_snapshot() {
        let r = resolver();
        let snapshot = r.registry().snapshot();
        r.switch_locale("en-US").unwrap();
        let none = Params::new();
        assert_eq!(r.resolve_from(&snapshot, "Common", "ok", &none), "确定");
        assert_eq!(r.resolve_from(&snapshot, "Common", "loading", &none), "Loading");
        assert_eq!(r.resolve_from(&snapshot, "Common", "nope", &none), "Common.nope");
        let stats = r.missing_stats();
        assert_eq!((stats.fallback_hits, stats.misses), (1, 1));
    }

    #[test]
    fn clones_share_counters() {
        let r = resolver();
        let clone = r.clone();
        let _ = clone.resolve("Common", "nope");
        assert_eq!(r.missing_stats().misses, 1);
    }
}

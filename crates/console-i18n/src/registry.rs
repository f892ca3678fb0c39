#![forbid(unsafe_code)]

//! Locale registry: one [`Catalog`] per locale plus the active-locale pointer.
//!
//! # Invariants
//!
//! 1. **Fallback present**: the fallback locale always has a catalog. It is
//!    supplied at construction and can be replaced but never removed.
//! 2. **Active is registered**: the active locale always names a registered
//!    catalog. A failed [`set_active`](CatalogRegistry::set_active) leaves it
//!    unchanged.
//! 3. **Consistent reads**: catalog map and active id sit behind one
//!    `RwLock`; [`snapshot`](CatalogRegistry::snapshot) copies both under a
//!    single read guard, so readers observe either the state before a
//!    mutation or after it.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | `set_active` with unregistered id | `UnknownLocale`, active unchanged |
//! | Empty locale id | `""` passed to `new`/`register` | `EmptyLocale` |
//! | Missing fallback | `from_config` without fallback catalog | `FallbackNotRegistered` |
//! | Poisoned lock | Panic while holding the write guard | Guard recovered; state is whole |

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Catalog;
use crate::config::I18nConfig;
use crate::error::I18nError;

#[derive(Debug)]
struct RegistryState {
    catalogs: HashMap<Arc<str>, Arc<Catalog>>,
    active: Arc<str>,
}

/// A consistent view of the registry at one instant.
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    pub active_locale: Arc<str>,
    pub active: Arc<Catalog>,
    pub fallback_locale: Arc<str>,
    pub fallback: Arc<Catalog>,
}

impl RegistrySnapshot {
    /// Whether the active locale is the fallback locale.
    #[must_use]
    pub fn active_is_fallback(&self) -> bool {
        self.active_locale == self.fallback_locale
    }
}

/// Process-wide set of loaded catalogs.
///
/// # Example
///
/// ```
/// use console_i18n::catalog::Catalog;
/// use console_i18n::registry::CatalogRegistry;
///
/// let en = Catalog::builder().insert("Common", "ok", "OK").build().unwrap();
/// let zh = Catalog::builder().insert("Common", "ok", "确定").build().unwrap();
///
/// let registry = CatalogRegistry::new("en-US", en).unwrap();
/// registry.register("zh-CN", zh).unwrap();
/// registry.set_active("zh-CN").unwrap();
///
/// assert_eq!(registry.active(), "zh-CN");
/// assert!(registry.set_active("fr-FR").is_err());
/// assert_eq!(registry.active(), "zh-CN");
/// ```
#[derive(Debug)]
pub struct CatalogRegistry {
    fallback: Arc<str>,
    state: RwLock<RegistryState>,
}

impl CatalogRegistry {
    /// Create a registry whose fallback (and initially active) locale is
    /// `fallback_locale`.
    pub fn new(
        fallback_locale: impl AsRef<str>,
        fallback_catalog: impl Into<Arc<Catalog>>,
    ) -> Result<Self, I18nError> {
        let fallback: Arc<str> = non_empty_locale(fallback_locale.as_ref())?;
        let mut catalogs = HashMap::new();
        catalogs.insert(Arc::clone(&fallback), fallback_catalog.into());
        tracing::info!(fallback = %fallback, "catalog registry created");
        Ok(Self {
            state: RwLock::new(RegistryState {
                catalogs,
                active: Arc::clone(&fallback),
            }),
            fallback,
        })
    }

    /// Build from configuration and a set of loaded catalogs.
    ///
    /// Catalogs for locales outside `config.supported` are skipped. The
    /// fallback locale's catalog is mandatory. The active locale becomes
    /// [`I18nConfig::startup_locale`].
    pub fn from_config<I, L>(config: &I18nConfig, catalogs: I) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = (L, Catalog)>,
        L: AsRef<str>,
    {
        let mut pending: Vec<(String, Catalog)> = Vec::new();
        let mut fallback_catalog = None;
        for (locale, catalog) in catalogs {
            let locale = locale.as_ref();
            if !config.supports(locale) {
                tracing::warn!(locale, "skipping catalog for unsupported locale");
                continue;
            }
            if locale == config.fallback {
                fallback_catalog = Some(catalog);
            } else {
                pending.push((locale.to_string(), catalog));
            }
        }

        let fallback_catalog = fallback_catalog
            .ok_or_else(|| I18nError::FallbackNotRegistered(config.fallback.clone()))?;
        let registry = Self::new(&config.fallback, fallback_catalog)?;
        for (locale, catalog) in pending {
            registry.register(locale, catalog)?;
        }
        registry.set_active(config.startup_locale())?;
        Ok(registry)
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace the catalog for `locale`. Last write wins.
    pub fn register(
        &self,
        locale: impl AsRef<str>,
        catalog: impl Into<Arc<Catalog>>,
    ) -> Result<(), I18nError> {
        let locale = non_empty_locale(locale.as_ref())?;
        let catalog = catalog.into();
        let entries = catalog.len();
        let replaced = self.write().catalogs.insert(Arc::clone(&locale), catalog);
        if replaced.is_some() {
            tracing::info!(locale = %locale, entries, "catalog replaced");
        } else {
            tracing::info!(locale = %locale, entries, "catalog registered");
        }
        Ok(())
    }

    /// Make `locale` the active locale.
    pub fn set_active(&self, locale: &str) -> Result<(), I18nError> {
        let mut state = self.write();
        let Some((id, _)) = state.catalogs.get_key_value(locale) else {
            tracing::warn!(locale, active = %state.active, "rejected switch to unknown locale");
            return Err(I18nError::UnknownLocale(locale.to_string()));
        };
        if *state.active == *locale {
            return Ok(());
        }
        let id = Arc::clone(id);
        tracing::info!(from = %state.active, to = %id, "active locale switched");
        state.active = id;
        Ok(())
    }

    /// The active locale id.
    #[must_use]
    pub fn active(&self) -> String {
        self.read().active.to_string()
    }

    /// The fallback locale id.
    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// The catalog registered for `locale`, if any.
    #[must_use]
    pub fn catalog(&self, locale: &str) -> Option<Arc<Catalog>> {
        self.read().catalogs.get(locale).cloned()
    }

    /// Whether `locale` has a catalog.
    #[must_use]
    pub fn is_registered(&self, locale: &str) -> bool {
        self.read().catalogs.contains_key(locale)
    }

    /// Registered locale ids, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.read().catalogs.keys().map(|l| l.to_string()).collect();
        locales.sort_unstable();
        locales
    }

    /// Active and fallback catalogs captured under one read guard.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.read();
        let fallback = Arc::clone(&state.catalogs[&self.fallback]);
        let active = Arc::clone(&state.catalogs[&state.active]);
        RegistrySnapshot {
            active_locale: Arc::clone(&state.active),
            active,
            fallback_locale: Arc::clone(&self.fallback),
            fallback,
        }
    }

    /// Snapshot with `locale` standing in for the active locale.
    pub fn snapshot_for(&self, locale: &str) -> Result<RegistrySnapshot, I18nError> {
        let state = self.read();
        let Some((id, catalog)) = state.catalogs.get_key_value(locale) else {
            return Err(I18nError::UnknownLocale(locale.to_string()));
        };
        Ok(RegistrySnapshot {
            active_locale: Arc::clone(id),
            active: Arc::clone(catalog),
            fallback_locale: Arc::clone(&self.fallback),
            fallback: Arc::clone(&state.catalogs[&self.fallback]),
        })
    }

    // -----------------------------------------------------------------
    // Coverage
    // -----------------------------------------------------------------

    /// Coverage of every registered locale against the union of all pairs.
    ///
    /// A pair counts as present for a locale when the locale's own catalog
    /// or the fallback catalog provides it.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let state = self.read();
        let fallback = &state.catalogs[&self.fallback];

        let all: BTreeSet<(&str, &str)> = state
            .catalogs
            .values()
            .flat_map(|catalog| catalog.pairs())
            .collect();
        let total = all.len();

        let mut locale_tags: Vec<&Arc<str>> = state.catalogs.keys().collect();
        locale_tags.sort_unstable();

        let locales = locale_tags
            .into_iter()
            .map(|tag| {
                let catalog = &state.catalogs[tag];
                let mut missing = Vec::new();
                let mut via_fallback = 0;
                for &(namespace, key) in &all {
                    if catalog.contains(namespace, key) {
                        continue;
                    }
                    if fallback.contains(namespace, key) {
                        via_fallback += 1;
                    } else {
                        missing.push(format!("{namespace}.{key}"));
                    }
                }
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: tag.to_string(),
                    present,
                    via_fallback,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

fn non_empty_locale(locale: &str) -> Result<Arc<str>, I18nError> {
    if locale.is_empty() {
        Err(I18nError::EmptyLocale)
    } else {
        Ok(Arc::from(locale))
    }
}

/// Coverage report for a registry.
///
/// Shows how many pairs each locale covers relative to the full pair set
/// and lists the specific missing pairs as `namespace.key`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverageReport {
    /// Total number of distinct `(namespace, key)` pairs across all locales.
    pub total_keys: usize,
    /// Per-locale coverage data, sorted by locale.
    pub locales: Vec<LocaleCoverage>,
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocaleCoverage {
    pub locale: String,
    /// Pairs present directly or via the fallback catalog.
    pub present: usize,
    /// Pairs served only by the fallback catalog.
    pub via_fallback: usize,
    /// Pairs no catalog in the chain provides.
    pub missing: Vec<String>,
    /// Coverage as a percentage (0.0 to 100.0).
    pub coverage_percent: f32,
}

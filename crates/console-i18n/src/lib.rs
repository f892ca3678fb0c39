#![forbid(unsafe_code)]

//! Internationalization resources for the monitoring console.
//!
//! Translations are organized as immutable per-locale [`Catalog`]s of
//! namespaced `{name}` templates, held by a [`CatalogRegistry`] that tracks
//! the active and fallback locales, and rendered through a [`Resolver`]
//! that never fails on a missing translation.

pub mod catalog;
pub mod config;
pub mod consistency;
pub mod error;
pub mod global;
#[cfg(feature = "serde")]
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod template;

pub use catalog::{Catalog, CatalogBuilder, StaticCatalog};
pub use config::{ConfigError, I18nConfig, I18nConfigParse};
pub use consistency::{ConsistencyReport, PlaceholderMismatch};
pub use error::I18nError;
pub use registry::{CatalogRegistry, CoverageReport, LocaleCoverage, RegistrySnapshot};
pub use resolver::{MAX_TRACKED_MISSING, MissingStats, Resolution, Resolver, missing_placeholder};
pub use template::{Params, Template};

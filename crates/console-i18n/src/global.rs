#![forbid(unsafe_code)]

//! Process-wide resolver handle.
//!
//! Installed once during startup, before any UI rendering; lives until
//! process exit. Locale switches go through the installed resolver, so
//! callers never cache translated strings across a switch.

use std::sync::OnceLock;

use crate::error::I18nError;
use crate::resolver::{Resolver, missing_placeholder};
use crate::template::Params;

static GLOBAL_RESOLVER: OnceLock<Resolver> = OnceLock::new();

/// Install the process-wide resolver. Fails if one is already installed.
pub fn install(resolver: Resolver) -> Result<(), Resolver> {
    GLOBAL_RESOLVER.set(resolver)?;
    tracing::debug!("global resolver installed");
    Ok(())
}

/// The installed resolver, if any.
#[must_use]
pub fn resolver() -> Option<&'static Resolver> {
    GLOBAL_RESOLVER.get()
}

/// Resolve through the global resolver.
///
/// Before [`install`] this returns the missing-key placeholder.
#[must_use]
pub fn tr(namespace: &str, key: &str) -> String {
    tr_with(namespace, key, &Params::new())
}

/// Resolve with parameters through the global resolver.
#[must_use]
pub fn tr_with(namespace: &str, key: &str, params: &Params<'_>) -> String {
    match GLOBAL_RESOLVER.get() {
        Some(resolver) => resolver.resolve_with(namespace, key, params),
        None => {
            tracing::warn!(namespace, key, "translation requested before resolver install");
            missing_placeholder(namespace, key)
        }
    }
}

/// Switch the global active locale.
pub fn switch_locale(locale: &str) -> Result<(), I18nError> {
    match GLOBAL_RESOLVER.get() {
        Some(resolver) => resolver.switch_locale(locale),
        None => Err(I18nError::UnknownLocale(locale.to_string())),
    }
}

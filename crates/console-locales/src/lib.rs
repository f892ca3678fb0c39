#![forbid(unsafe_code)]

//! Monitoring-console catalogs compiled into the binary.
//!
//! `zh-CN` is the reference catalog authored with the console; `en-US`
//! carries the same namespaces and keys and is the default fallback.

use std::sync::Arc;

use console_i18n::{Catalog, CatalogRegistry, I18nConfig, I18nError, Resolver, StaticCatalog};

mod en_us;
mod zh_cn;

pub use en_us::EN_US;
pub use zh_cn::ZH_CN;

/// Simplified Chinese, the reference locale.
pub const ZH_CN_LOCALE: &str = "zh-CN";
/// US English, the default fallback.
pub const EN_US_LOCALE: &str = "en-US";

/// Locale ids with a compiled-in catalog.
pub fn bundled_locales() -> impl Iterator<Item = &'static str> {
    [ZH_CN_LOCALE, EN_US_LOCALE].into_iter()
}

/// Raw table for a bundled locale.
#[must_use]
pub fn bundled(locale: &str) -> Option<&'static StaticCatalog> {
    match locale {
        ZH_CN_LOCALE => Some(ZH_CN),
        EN_US_LOCALE => Some(EN_US),
        _ => None,
    }
}

/// Build the catalog for a bundled locale.
pub fn catalog(locale: &str) -> Result<Catalog, I18nError> {
    let table = bundled(locale).ok_or_else(|| I18nError::UnknownLocale(locale.to_string()))?;
    Catalog::from_static(table)
}

/// Registry holding the bundled catalog of every supported locale.
///
/// Supported locales without a bundled catalog are skipped with a warning;
/// the fallback locale must be bundled.
pub fn registry_from_config(config: &I18nConfig) -> Result<CatalogRegistry, I18nError> {
    let mut catalogs = Vec::with_capacity(config.supported.len());
    for locale in &config.supported {
        match bundled(locale) {
            Some(table) => catalogs.push((locale.as_str(), Catalog::from_static(table)?)),
            None => tracing::warn!(locale = %locale, "no bundled catalog for supported locale"),
        }
    }
    CatalogRegistry::from_config(config, catalogs)
}

/// Resolver over the bundled catalogs.
pub fn console_resolver(config: &I18nConfig) -> Result<Resolver, I18nError> {
    Ok(Resolver::new(Arc::new(registry_from_config(config)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_i18n::Params;

    #[test]
    fn bundled_catalogs_build() {
        for locale in bundled_locales() {
            let catalog = catalog(locale).unwrap();
            assert_eq!(catalog.len(), 174, "{locale}");
            assert_eq!(catalog.namespaces().len(), 21, "{locale}");
        }
        assert_eq!(
            catalog("fr-FR").unwrap_err(),
            I18nError::UnknownLocale("fr-FR".into())
        );
    }

    #[test]
    fn default_config_resolves_chinese() {
        let resolver = console_resolver(&I18nConfig::default()).unwrap();
        assert_eq!(resolver.active_locale(), ZH_CN_LOCALE);
        assert_eq!(resolver.resolve("Common", "ok"), "确定");
        assert_eq!(resolver.resolve("Common", "cancel"), "取消");
        assert_eq!(resolver.resolve("SiderMenu", "Log View"), "日志");
        assert_eq!(resolver.resolve("TimePicker", "10s"), "10秒");
        assert_eq!(resolver.resolve("Common", "missingKey"), "Common.missingKey");
        assert_eq!(
            resolver.resolve_with("Common", "ok", &Params::from([("unused", "x")])),
            "确定"
        );
    }

    #[test]
    fn switching_to_english() {
        let resolver = console_resolver(&I18nConfig::default()).unwrap();
        resolver.switch_locale(EN_US_LOCALE).unwrap();
        assert_eq!(resolver.resolve("LayoutHeader", "language"), "English");
        assert_eq!(resolver.resolve("StorageView", "nodeStatus"), "Node Status");
    }

    #[test]
    fn chinese_only_config() {
        let config = I18nConfig::new([ZH_CN_LOCALE], ZH_CN_LOCALE);
        let registry = registry_from_config(&config).unwrap();
        assert_eq!(registry.locales(), vec![ZH_CN_LOCALE]);
        assert_eq!(registry.active(), ZH_CN_LOCALE);
    }

    #[test]
    fn fallback_without_bundled_catalog_is_fatal() {
        let config = I18nConfig::new([ZH_CN_LOCALE, "ko-KR"], "ko-KR");
        assert_eq!(
            registry_from_config(&config).unwrap_err(),
            I18nError::FallbackNotRegistered("ko-KR".into())
        );
    }
}

#![forbid(unsafe_code)]

//! Locale configuration: supported locales, fallback, and startup locale.
//!
//! Environment variables:
//! - `CONSOLE_I18N_LOCALE`: default active locale
//! - `CONSOLE_I18N_FALLBACK`: fallback locale
//! - `CONSOLE_I18N_SUPPORTED`: comma-separated supported locales

use std::collections::HashSet;
use std::env;
use std::fmt;

/// Default active locale variable.
pub const ENV_LOCALE: &str = "CONSOLE_I18N_LOCALE";
/// Fallback locale variable.
pub const ENV_FALLBACK: &str = "CONSOLE_I18N_FALLBACK";
/// Comma-separated supported locales variable.
pub const ENV_SUPPORTED: &str = "CONSOLE_I18N_SUPPORTED";

/// Locale shipped as the reference catalog of the console.
pub const DEFAULT_ACTIVE_LOCALE: &str = "zh-CN";
/// Locale consulted when the active catalog lacks a key.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en-US";

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    pub supported: Vec<String>,
    pub fallback: String,
    pub default_active: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported: vec![
                DEFAULT_ACTIVE_LOCALE.to_string(),
                DEFAULT_FALLBACK_LOCALE.to_string(),
            ],
            fallback: DEFAULT_FALLBACK_LOCALE.to_string(),
            default_active: Some(DEFAULT_ACTIVE_LOCALE.to_string()),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct I18nConfigParse {
    pub config: I18nConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl I18nConfig {
    /// Config with no default active locale; the fallback starts active.
    #[must_use]
    pub fn new<I, S>(supported: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: supported.into_iter().map(Into::into).collect(),
            fallback: fallback.into(),
            default_active: None,
        }
    }

    /// Set the locale activated at startup.
    #[must_use]
    pub fn with_default_active(mut self, locale: impl Into<String>) -> Self {
        self.default_active = Some(locale.into());
        self
    }

    /// Whether `locale` is in the supported set.
    #[must_use]
    pub fn supports(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    /// Locale the registry activates at startup.
    #[must_use]
    pub fn startup_locale(&self) -> &str {
        self.default_active.as_deref().unwrap_or(&self.fallback)
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> I18nConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> I18nConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.supported.is_empty() {
            errors.push(ConfigError::new(
                "supported",
                "",
                "at least one locale must be supported",
            ));
        }
        let mut seen = HashSet::new();
        for locale in &self.supported {
            if locale.is_empty() {
                errors.push(ConfigError::new("supported", locale, "empty locale id"));
            } else if !seen.insert(locale.as_str()) {
                errors.push(ConfigError::new("supported", locale, "duplicate locale id"));
            }
        }

        if self.fallback.is_empty() {
            errors.push(ConfigError::new("fallback", "", "empty locale id"));
        } else if !self.supports(&self.fallback) {
            errors.push(ConfigError::new(
                "fallback",
                &self.fallback,
                "fallback locale must be supported",
            ));
        }

        if let Some(active) = &self.default_active {
            if !self.supports(active) {
                errors.push(ConfigError::new(
                    "default_active",
                    active,
                    "default locale must be supported",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Parse config using `get` as the environment source.
pub fn from_env_with<F>(mut get: F) -> I18nConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = I18nConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_SUPPORTED) {
        let locales = parse_locale_list(&value);
        if locales.is_empty() {
            errors.push(ConfigError::new(
                "supported",
                value,
                "expected comma-separated locale ids",
            ));
        } else {
            config.supported = locales;
        }
    }

    if let Some(value) = get(ENV_FALLBACK) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(ConfigError::new("fallback", value, "expected locale id"));
        } else {
            config.fallback = trimmed.to_string();
        }
    }

    match get(ENV_LOCALE) {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                errors.push(ConfigError::new("default_active", value, "expected locale id"));
            } else {
                config.default_active = Some(trimmed.to_string());
            }
        }
        None => {
            // The built-in default only applies while it is still supported.
            let stale = config
                .default_active
                .as_deref()
                .is_some_and(|active| !config.supports(active));
            if stale {
                config.default_active = None;
            }
        }
    }

    if let Err(mut violations) = config.validate() {
        errors.append(&mut violations);
    }

    I18nConfigParse { config, errors }
}

fn parse_locale_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

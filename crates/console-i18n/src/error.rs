#![forbid(unsafe_code)]

//! Error taxonomy for catalog construction and locale selection.
//!
//! Lookup misses are deliberately absent here: a missing translation or an
//! unmatched placeholder degrades to visible text instead of failing.

use std::fmt;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The same `(namespace, key)` pair was supplied twice to one catalog.
    DuplicateKey { namespace: String, key: String },
    /// A namespace name was the empty string.
    EmptyNamespace,
    /// A key inside `namespace` was the empty string.
    EmptyKey { namespace: String },
    /// A locale identifier was the empty string.
    EmptyLocale,
    /// No catalog is registered for the requested locale.
    UnknownLocale(String),
    /// The configured fallback locale has no catalog.
    FallbackNotRegistered(String),
    /// A serialized catalog could not be decoded.
    Parse(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { namespace, key } => {
                write!(f, "duplicate key '{key}' in namespace '{namespace}'")
            }
            Self::EmptyNamespace => write!(f, "empty namespace name"),
            Self::EmptyKey { namespace } => write!(f, "empty key in namespace '{namespace}'"),
            Self::EmptyLocale => write!(f, "empty locale identifier"),
            Self::UnknownLocale(locale) => write!(f, "unknown locale: {locale}"),
            Self::FallbackNotRegistered(locale) => {
                write!(f, "fallback locale '{locale}' has no registered catalog")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for I18nError {}

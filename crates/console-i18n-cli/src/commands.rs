#![forbid(unsafe_code)]

//! Command implementations. Each returns its stdout text so it can be
//! tested without spawning the binary.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use console_i18n::consistency::{self, ConsistencyReport};
use console_i18n::{Catalog, I18nConfig, I18nError, Params, Resolution, Resolver};
use thiserror::Error;

/// Failures surfaced as exit code 2.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: I18nError,
    },
    #[error(transparent)]
    I18n(#[from] I18nError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Text plus whether every checked catalog was interchangeable.
#[derive(Debug)]
pub struct CheckOutput {
    pub text: String,
    pub clean: bool,
}

/// Read and decode one JSON catalog.
pub fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json_str(&json).map_err(|source| CliError::Catalog {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Compare each of `files` against `reference`.
pub fn check(reference: &Path, files: &[PathBuf], json: bool) -> CliResult<CheckOutput> {
    let reference_catalog = load_catalog(reference)?;
    let mut reports: Vec<(String, ConsistencyReport)> = Vec::with_capacity(files.len());
    for file in files {
        let candidate = load_catalog(file)?;
        let report = consistency::check(&reference_catalog, &candidate);
        if !report.is_interchangeable() {
            tracing::warn!(
                file = %file.display(),
                issues = report.issue_count(),
                "catalog diverges from reference"
            );
        }
        reports.push((file.display().to_string(), report));
    }

    let clean = reports.iter().all(|(_, report)| report.is_interchangeable());
    let text = if json {
        let value: serde_json::Map<String, serde_json::Value> = reports
            .iter()
            .map(|(file, report)| Ok((file.clone(), serde_json::to_value(report)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        let mut text = serde_json::to_string_pretty(&value)?;
        text.push('\n');
        text
    } else {
        let mut text = String::new();
        for (file, report) in &reports {
            let _ = writeln!(text, "== {file}");
            let _ = writeln!(text, "{}", report.to_string().trim_end());
        }
        text
    };
    Ok(CheckOutput { text, clean })
}

/// Resolve one key against the bundled catalogs.
pub fn resolve(
    config: &I18nConfig,
    locale: Option<&str>,
    namespace: &str,
    key: &str,
    params: &[(String, String)],
) -> CliResult<String> {
    let resolver = console_locales::console_resolver(config)?;
    resolve_with_resolver(&resolver, locale, namespace, key, params)
}

/// Resolve through `resolver` from a single registry snapshot.
fn resolve_with_resolver(
    resolver: &Resolver,
    locale: Option<&str>,
    namespace: &str,
    key: &str,
    params: &[(String, String)],
) -> CliResult<String> {
    let params: Params<'_> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let snapshot = match locale {
        Some(locale) => resolver.registry().snapshot_for(locale)?,
        None => resolver.registry().snapshot(),
    };
    // Misses are logged by the resolver itself.
    if let Resolution::Fallback(_) = Resolver::lookup(&snapshot, namespace, key) {
        tracing::info!(
            locale = %snapshot.active_locale,
            fallback = %snapshot.fallback_locale,
            "served by fallback locale"
        );
    }
    Ok(resolver.resolve_from(&snapshot, namespace, key, &params))
}

/// Pretty JSON for a bundled catalog.
pub fn export(locale: &str) -> CliResult<String> {
    let catalog = console_locales::catalog(locale)?;
    Ok(serde_json::to_string_pretty(&catalog)?)
}

/// Coverage of the bundled catalogs under `config`.
pub fn coverage(config: &I18nConfig, json: bool) -> CliResult<String> {
    let registry = console_locales::registry_from_config(config)?;
    let report = registry.coverage_report();
    if json {
        let mut text = serde_json::to_string_pretty(&report)?;
        text.push('\n');
        return Ok(text);
    }
    let mut text = String::new();
    let _ = writeln!(text, "keys: {}", report.total_keys);
    for locale in &report.locales {
        let _ = writeln!(
            text,
            "{}: {:.1}% ({}/{}, {} via fallback)",
            locale.locale,
            locale.coverage_percent,
            locale.present,
            report.total_keys,
            locale.via_fallback
        );
        for pair in &locale.missing {
            let _ = writeln!(text, "  missing {pair}");
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn check_reports_divergence() {
        let reference = json_file(r#"{ "Common": { "ok": "OK", "cancel": "Cancel" } }"#);
        let good = json_file(r#"{ "Common": { "ok": "确定", "cancel": "取消" } }"#);
        let partial = json_file(r#"{ "Common": { "ok": "确定" } }"#);

        let output = check(
            reference.path(),
            &[good.path().to_path_buf(), partial.path().to_path_buf()],
            false,
        )
        .unwrap();
        assert!(!output.clean);
        assert!(output.text.contains("interchangeable"));
        assert!(output.text.contains("missing: Common.cancel"));
    }

    #[test]
    fn check_clean_json_output() {
        let reference = json_file(r#"{ "Common": { "ok": "OK" } }"#);
        let zh = json_file(r#"{ "Common": { "ok": "确定" } }"#);
        let output = check(reference.path(), &[zh.path().to_path_buf()], true).unwrap();
        assert!(output.clean);
        let value: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        let report = value.as_object().unwrap().values().next().unwrap();
        assert_eq!(report["missing"], serde_json::json!([]));
    }

    #[test]
    fn check_surfaces_duplicate_keys() {
        let reference = json_file(r#"{ "Common": { "ok": "OK", "ok": "Okay" } }"#);
        let err = check(reference.path(), &[], false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Catalog {
                source: I18nError::DuplicateKey { .. },
                ..
            }
        ));
    }

    #[test]
    fn check_missing_file() {
        let err = check(Path::new("/nonexistent/en.json"), &[], false).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn resolve_against_bundled_catalogs() {
        let config = I18nConfig::default();
        assert_eq!(resolve(&config, None, "Common", "ok", &[]).unwrap(), "确定");
        assert_eq!(
            resolve(&config, Some("en-US"), "Common", "ok", &[]).unwrap(),
            "OK"
        );
        assert_eq!(
            resolve(&config, None, "Common", "nope", &[]).unwrap(),
            "Common.nope"
        );
        assert!(matches!(
            resolve(&config, Some("fr-FR"), "Common", "ok", &[]),
            Err(CliError::I18n(I18nError::UnknownLocale(_)))
        ));
    }

    #[test]
    fn resolve_records_each_miss_once() {
        let resolver = console_locales::console_resolver(&I18nConfig::default()).unwrap();
        let text = resolve_with_resolver(&resolver, None, "Common", "nope", &[]).unwrap();
        assert_eq!(text, "Common.nope");
        let text =
            resolve_with_resolver(&resolver, Some("en-US"), "Common", "ok", &[]).unwrap();
        assert_eq!(text, "OK");

        let stats = resolver.missing_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.missing_keys, vec!["Common.nope"]);
        // Explicit locales never move the active one.
        assert_eq!(resolver.active_locale(), "zh-CN");
    }

    #[test]
    fn export_round_trips() {
        let text = export("zh-CN").unwrap();
        let catalog = Catalog::from_json_str(&text).unwrap();
        assert_eq!(catalog, console_locales::catalog("zh-CN").unwrap());
        assert!(export("fr-FR").is_err());
    }

    #[test]
    fn coverage_text() {
        let text = coverage(&I18nConfig::default(), false).unwrap();
        assert!(text.starts_with("keys: 174\n"));
        assert!(text.contains("zh-CN: 100.0%"));
    }
}

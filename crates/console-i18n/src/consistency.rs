#![forbid(unsafe_code)]

//! Cross-locale consistency checks.
//!
//! Two catalogs are interchangeable when they define the same
//! `(namespace, key)` pairs and each pair uses the same placeholder names.
//! Partial catalogs still work at runtime through fallback; this report is
//! how divergence is detected ahead of time.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::Catalog;

/// A pair whose placeholder names differ between two catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlaceholderMismatch {
    pub namespace: String,
    pub key: String,
    /// Placeholder names in the reference template, sorted.
    pub reference: Vec<String>,
    /// Placeholder names in the candidate template, sorted.
    pub candidate: Vec<String>,
}

/// Differences between a candidate catalog and a reference catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConsistencyReport {
    /// Pairs in the reference that the candidate lacks, as `namespace.key`.
    pub missing: Vec<String>,
    /// Pairs in the candidate that the reference lacks, as `namespace.key`.
    pub extra: Vec<String>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl ConsistencyReport {
    /// No missing or extra pairs and no placeholder mismatches.
    #[must_use]
    pub fn is_interchangeable(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.placeholder_mismatches.is_empty()
    }

    /// Total number of findings.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.extra.len() + self.placeholder_mismatches.len()
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_interchangeable() {
            return write!(f, "interchangeable");
        }
        for pair in &self.missing {
            writeln!(f, "missing: {pair}")?;
        }
        for pair in &self.extra {
            writeln!(f, "extra: {pair}")?;
        }
        for mismatch in &self.placeholder_mismatches {
            writeln!(
                f,
                "placeholders: {}.{} expected {{{}}} found {{{}}}",
                mismatch.namespace,
                mismatch.key,
                mismatch.reference.join(","),
                mismatch.candidate.join(",")
            )?;
        }
        Ok(())
    }
}

/// Compare `candidate` against `reference`.
///
/// All lists are sorted by `(namespace, key)` because both catalogs iterate
/// in that order.
#[must_use]
pub fn check(reference: &Catalog, candidate: &Catalog) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    for (namespace, key, template) in reference.entries() {
        match candidate.get(namespace, key) {
            None => report.missing.push(format!("{namespace}.{key}")),
            Some(other) => {
                let expected: BTreeSet<&str> = template.placeholder_names();
                let found: BTreeSet<&str> = other.placeholder_names();
                if expected != found {
                    report.placeholder_mismatches.push(PlaceholderMismatch {
                        namespace: namespace.to_string(),
                        key: key.to_string(),
                        reference: expected.into_iter().map(str::to_string).collect(),
                        candidate: found.into_iter().map(str::to_string).collect(),
                    });
                }
            }
        }
    }

    report.extra = candidate
        .pairs()
        .filter(|&(namespace, key)| !reference.contains(namespace, key))
        .map(|(namespace, key)| format!("{namespace}.{key}"))
        .collect();

    report
}

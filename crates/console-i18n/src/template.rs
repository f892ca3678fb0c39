#![forbid(unsafe_code)]

//! Template strings with `{name}` placeholders.
//!
//! # Invariants
//!
//! 1. **Single pass**: `render()` scans the template once; substituted
//!    values are never re-scanned, so a value containing `{x}` stays literal.
//! 2. **Lenient**: a placeholder with no matching parameter is emitted
//!    verbatim, braces included. Extra parameters are ignored.
//! 3. **Literal braces**: `{}` and an unclosed `{` are plain text. In
//!    `{a{b}` only `{b}` is a placeholder.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A `{name}` marker; holds the name without braces.
    Placeholder(&'a str),
}

/// Iterator over the [`Segment`]s of a template.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut search_from = 0;
        loop {
            let Some(rel_open) = self.rest[search_from..].find('{') else {
                let literal = self.rest;
                self.rest = "";
                return Some(Segment::Literal(literal));
            };
            let open = search_from + rel_open;
            let after_open = &self.rest[open + 1..];
            let Some(close_rel) = after_open.find('}') else {
                let literal = self.rest;
                self.rest = "";
                return Some(Segment::Literal(literal));
            };
            let name = &after_open[..close_rel];

            if name.is_empty() || name.contains('{') {
                // Not a placeholder: keep this brace in the literal run.
                search_from = open + 1;
                continue;
            }

            if open > 0 {
                let literal = &self.rest[..open];
                self.rest = &self.rest[open..];
                return Some(Segment::Literal(literal));
            }

            self.rest = &after_open[close_rel + 1..];
            return Some(Segment::Placeholder(name));
        }
    }
}

/// Split `template` into literal and placeholder segments.
#[must_use]
pub fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

/// Substitution parameters for [`Template::render`].
///
/// Lookup is by exact name; when a name appears more than once the first
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Params<'a> {
    /// No parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &'a str, value: &'a str) -> Self {
        self.pairs.push((name, value));
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, name: &'a str, value: &'a str) {
        self.pairs.push((name, value));
    }

    /// Value of the first parameter named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|&&(candidate, _)| candidate == name)
            .map(|&(_, value)| value)
    }

    /// Number of parameters, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> From<&'a [(&'a str, &'a str)]> for Params<'a> {
    fn from(pairs: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            pairs: pairs.to_vec(),
        }
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for Params<'a> {
    fn from(pairs: [(&'a str, &'a str); N]) -> Self {
        Self {
            pairs: pairs.to_vec(),
        }
    }
}

impl<'a> From<&'a HashMap<String, String>> for Params<'a> {
    fn from(map: &'a HashMap<String, String>) -> Self {
        map.iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// An immutable translation value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    text: Box<str>,
}

impl Template {
    /// Wrap `text` as a template.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().into_boxed_str(),
        }
    }

    /// The raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Placeholder names in order of appearance (repeats included).
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        segments(&self.text).filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
    }

    /// Distinct placeholder names, sorted.
    #[must_use]
    pub fn placeholder_names(&self) -> BTreeSet<&str> {
        self.placeholders().collect()
    }

    /// Whether the template has at least one placeholder.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Substitute `params` into the template.
    #[must_use]
    pub fn render(&self, params: &Params<'_>) -> String {
        render(&self.text, params)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Single-pass `{name}` substitution. Unmatched tokens left as-is.
#[must_use]
pub fn render(template: &str, params: &Params<'_>) -> String {
    let mut result = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Placeholder(name) => match params.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    result.push('{');
                    result.push_str(name);
                    result.push('}');
                }
            },
        }
    }
    result
}

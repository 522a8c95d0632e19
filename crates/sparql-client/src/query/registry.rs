//! `BASE` and `PREFIX` declarations, and the preamble built from them.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::lexical::ensure_safe_iri;
use crate::model::vocab::{common_prefix, COMMON_PREFIXES};

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// One call's worth of declarations for [`Registry::register`].
///
/// - a single string sets the base IRI
/// - a `(name, uri)` pair adds one prefix
/// - a collection of pairs merges several prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Base(String),
    Prefix(String, String),
    Prefixes(Vec<(String, String)>),
}

impl From<&str> for Registration {
    fn from(base: &str) -> Self {
        Registration::Base(base.to_string())
    }
}

impl From<String> for Registration {
    fn from(base: String) -> Self {
        Registration::Base(base)
    }
}

impl From<(&str, &str)> for Registration {
    fn from((name, uri): (&str, &str)) -> Self {
        Registration::Prefix(name.to_string(), uri.to_string())
    }
}

impl From<(String, String)> for Registration {
    fn from((name, uri): (String, String)) -> Self {
        Registration::Prefix(name, uri)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Registration {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Registration::Prefixes(
            pairs
                .iter()
                .map(|(name, uri)| (name.to_string(), uri.to_string()))
                .collect(),
        )
    }
}

impl From<Vec<(String, String)>> for Registration {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Registration::Prefixes(pairs)
    }
}

impl From<BTreeMap<String, String>> for Registration {
    fn from(map: BTreeMap<String, String>) -> Self {
        Registration::Prefixes(map.into_iter().collect())
    }
}

impl From<HashMap<String, String>> for Registration {
    fn from(map: HashMap<String, String>) -> Self {
        // Sorted so the preamble does not depend on hash order.
        let mut pairs: Vec<_> = map.into_iter().collect();
        pairs.sort();
        Registration::Prefixes(pairs)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Base IRI plus prefixes in first-insertion order.
///
/// Cloning gives an independent copy; this is how each query gets its own
/// registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    base: Option<String>,
    prefixes: Vec<(String, String)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Namespace registered under `name`.
    pub fn prefix(&self, name: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, uri)| uri.as_str())
    }

    /// Registered prefixes in insertion order.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(name, uri)| (name.as_str(), uri.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.prefixes.is_empty()
    }

    /// Set the base IRI; the last call wins.
    pub fn set_base(&mut self, uri: impl Into<String>) -> &mut Self {
        self.base = Some(uri.into());
        self
    }

    /// Add or overwrite one prefix. An overwritten prefix keeps its position.
    pub fn add_prefix(&mut self, name: impl Into<String>, uri: impl Into<String>) -> &mut Self {
        let name = name.into();
        let uri = uri.into();
        match self.prefixes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = uri,
            None => self.prefixes.push((name, uri)),
        }
        self
    }

    /// Apply a [`Registration`].
    pub fn register(&mut self, registration: impl Into<Registration>) -> &mut Self {
        match registration.into() {
            Registration::Base(uri) => self.set_base(uri),
            Registration::Prefix(name, uri) => self.add_prefix(name, uri),
            Registration::Prefixes(pairs) => {
                for (name, uri) in pairs {
                    self.add_prefix(name, uri);
                }
                self
            }
        }
    }

    /// Merge well-known prefixes: all of them for an empty slice, otherwise
    /// only the named ones.
    ///
    /// Every name is checked before anything is merged, so an unknown name
    /// leaves the registry untouched.
    pub fn register_common(&mut self, names: &[&str]) -> Result<&mut Self> {
        if names.is_empty() {
            for (name, uri) in COMMON_PREFIXES {
                self.add_prefix(*name, *uri);
            }
            return Ok(self);
        }

        let resolved = names
            .iter()
            .map(|name| {
                common_prefix(name)
                    .map(|uri| (*name, uri))
                    .ok_or_else(|| Error::UnknownPrefix(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (name, uri) in resolved {
            self.add_prefix(name, uri);
        }
        Ok(self)
    }

    /// Preamble for this registry, see [`build_preamble`].
    pub fn preamble(&self) -> Result<String> {
        build_preamble(self)
    }
}

/// `BASE <uri>` and one `PREFIX name: <uri>` line per prefix, followed by a
/// blank line. Empty when nothing is registered.
pub fn build_preamble(registry: &Registry) -> Result<String> {
    let mut preamble = String::new();

    if let Some(base) = &registry.base {
        preamble.push_str(&format!("BASE <{}>\n", ensure_safe_iri(base)?));
    }

    for (name, uri) in &registry.prefixes {
        preamble.push_str(&format!("PREFIX {name}: <{}>\n", ensure_safe_iri(uri)?));
    }

    if !preamble.is_empty() {
        preamble.push('\n');
    }

    debug!(
        prefixes = registry.prefixes.len(),
        has_base = registry.base.is_some(),
        "built preamble"
    );
    Ok(preamble)
}

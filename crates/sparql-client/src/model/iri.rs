//! IRI terms, written either as `<uri>` or as a prefixed name.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::lexical::{ensure_safe_iri, LexicalType};
use crate::model::vocab::{standard, xsd};

/// Prefix part of a prefixed name (simplified PN_PREFIX, may be empty).
static PREFIX_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9_.-]*)?$").expect("prefix name regex"));

/// Characters that can never appear in the local part of a prefixed name.
const LOCAL_NAME_FORBIDDEN: &[char] = &[
    '\0', ' ', '\t', '\r', '\n', '<', '>', '"', '{', '}', '|', '^', '`', '\\',
];

// ---------------------------------------------------------------------------
// IriSource
// ---------------------------------------------------------------------------

/// Input accepted by [`Iri::create`].
///
/// A mapping is shorthand for a prefixed name and must hold exactly one
/// `prefix -> local` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IriSource {
    Uri(String),
    Mapping(BTreeMap<String, String>),
}

impl fmt::Display for IriSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IriSource::Uri(uri) => write!(f, "{uri:?}"),
            IriSource::Mapping(map) => write!(f, "{map:?}"),
        }
    }
}

impl From<&str> for IriSource {
    fn from(uri: &str) -> Self {
        IriSource::Uri(uri.to_string())
    }
}

impl From<String> for IriSource {
    fn from(uri: String) -> Self {
        IriSource::Uri(uri)
    }
}

impl From<(&str, &str)> for IriSource {
    fn from((prefix, local): (&str, &str)) -> Self {
        IriSource::Mapping(BTreeMap::from([(prefix.to_string(), local.to_string())]))
    }
}

impl From<BTreeMap<String, String>> for IriSource {
    fn from(map: BTreeMap<String, String>) -> Self {
        IriSource::Mapping(map)
    }
}

impl From<HashMap<String, String>> for IriSource {
    fn from(map: HashMap<String, String>) -> Self {
        IriSource::Mapping(map.into_iter().collect())
    }
}

impl From<&Iri> for IriSource {
    fn from(iri: &Iri) -> Self {
        match &iri.form {
            IriForm::Full(uri) => IriSource::Uri(uri.clone()),
            IriForm::Prefixed { prefix, local } => (prefix.as_str(), local.as_str()).into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Iri
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IriForm {
    Full(String),
    Prefixed { prefix: String, local: String },
}

/// An immutable IRI term.
///
/// Carries a namespace tag (`xsd`, `rdf`, ...) when one is known, so
/// built-in datatypes can be recognized without string comparisons on the
/// full URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri {
    form: IriForm,
    namespace: Option<String>,
}

impl Iri {
    /// Build an IRI from a URI or a single-entry `{prefix: local}` mapping.
    pub fn create(source: impl Into<IriSource>) -> Result<Self> {
        match source.into() {
            IriSource::Uri(uri) => Self::from_uri(uri),
            IriSource::Mapping(map) => {
                if map.len() != 1 {
                    return Err(Error::InvalidIri(format!(
                        "prefixed name mapping must have exactly one entry, got {}",
                        map.len()
                    )));
                }
                let Some((prefix, local)) = map.into_iter().next() else {
                    return Err(Error::InvalidIri("empty prefixed name mapping".to_string()));
                };
                Self::prefixed(prefix, local)
            }
        }
    }

    fn from_uri(uri: String) -> Result<Self> {
        ensure_safe_iri(&uri)?;
        let namespace = uri
            .starts_with(standard::XSD)
            .then(|| xsd::PREFIX.to_string());
        Ok(Self {
            form: IriForm::Full(uri),
            namespace,
        })
    }

    fn prefixed(prefix: String, local: String) -> Result<Self> {
        if !PREFIX_NAME.is_match(&prefix) {
            return Err(Error::InvalidIri(format!("bad prefix name {prefix:?}")));
        }
        if local.contains(LOCAL_NAME_FORBIDDEN) {
            return Err(Error::InvalidIri(format!("bad local name {local:?}")));
        }
        Ok(Self {
            namespace: Some(prefix.clone()),
            form: IriForm::Prefixed { prefix, local },
        })
    }

    /// `xsd:`-namespaced IRI for a datatype local name, e.g. `integer`.
    pub(crate) fn xsd(local: &str) -> Self {
        Self {
            form: IriForm::Full(format!("{}{local}", standard::XSD)),
            namespace: Some(xsd::PREFIX.to_string()),
        }
    }

    /// Namespace tag, if known.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The full URI, if this IRI was not written as a prefixed name.
    pub fn uri(&self) -> Option<&str> {
        match &self.form {
            IriForm::Full(uri) => Some(uri),
            IriForm::Prefixed { .. } => None,
        }
    }

    /// Local name: the part after the prefix, or after `#` for `xsd` URIs.
    pub fn local_name(&self) -> Option<&str> {
        match &self.form {
            IriForm::Prefixed { local, .. } => Some(local),
            IriForm::Full(uri) => uri.strip_prefix(standard::XSD),
        }
    }

    /// Bare-literal type for a recognized `xsd` datatype.
    pub fn builtin_type(&self) -> Option<LexicalType> {
        if self.namespace() != Some(xsd::PREFIX) {
            return None;
        }
        self.local_name().and_then(LexicalType::from_xsd_local)
    }

    /// `<uri>` or `prefix:local`.
    pub fn format(&self) -> String {
        match &self.form {
            IriForm::Full(uri) => format!("<{uri}>"),
            IriForm::Prefixed { prefix, local } => format!("{prefix}:{local}"),
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

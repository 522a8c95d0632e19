//! Literal terms: typed scalars and language-tagged strings.

use std::fmt;

use crate::error::{Error, Result};
use crate::model::iri::{Iri, IriSource};
use crate::model::lexical::{self, ensure_safe_string, valid_language_tag};

// ---------------------------------------------------------------------------
// Literal
// ---------------------------------------------------------------------------

/// A scalar value with an optional datatype.
///
/// Values whose datatype is a built-in `xsd` numeric or boolean type are
/// written bare when they fit the type's lexical form; everything else is
/// quoted and, if typed, suffixed with `^^datatype`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: String,
    datatype: Option<Iri>,
}

impl Literal {
    /// Untyped literal from anything with a textual form.
    pub fn new(value: impl fmt::Display) -> Result<Self> {
        let value = value.to_string();
        ensure_safe_string(&value)?;
        Ok(Self {
            value,
            datatype: None,
        })
    }

    /// Typed literal. `datatype` is a URI or a `(prefix, local)` name.
    pub fn typed(value: impl fmt::Display, datatype: impl Into<IriSource>) -> Result<Self> {
        let source = datatype.into();
        let shown = source.to_string();
        let datatype = Iri::create(source).map_err(|_| Error::InvalidDatatype(shown))?;

        let mut literal = Self::new(value)?;
        literal.datatype = Some(datatype);
        Ok(literal)
    }

    /// Literal whose value is known to be NUL-free.
    pub(crate) fn xsd(value: String, local: &str) -> Self {
        Self {
            value,
            datatype: Some(Iri::xsd(local)),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    pub fn format(&self) -> String {
        if let Some(ty) = self.datatype.as_ref().and_then(Iri::builtin_type) {
            if let Some(bare) = lexical::try_format_type(&self.value, ty) {
                return bare;
            }
        }

        let mut term = lexical::format_string(&self.value);
        if let Some(datatype) = &self.datatype {
            term.push_str("^^");
            term.push_str(&datatype.format());
        }
        term
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

// ---------------------------------------------------------------------------
// StringLiteral
// ---------------------------------------------------------------------------

/// A plain string with an optional language tag. Never carries a datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral {
    value: String,
    language: Option<String>,
}

impl StringLiteral {
    pub fn new(value: impl fmt::Display, language: Option<&str>) -> Result<Self> {
        let value = value.to_string();
        ensure_safe_string(&value)?;

        let language = match language {
            Some(tag) if valid_language_tag(tag) => Some(tag.to_string()),
            Some(tag) => return Err(Error::InvalidLanguageTag(tag.to_string())),
            None => None,
        };
        Ok(Self { value, language })
    }

    /// String without a language tag.
    pub fn plain(value: impl fmt::Display) -> Result<Self> {
        Self::new(value, None)
    }

    pub fn with_language(value: impl fmt::Display, language: &str) -> Result<Self> {
        Self::new(value, Some(language))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn format(&self) -> String {
        let mut term = lexical::format_string(&self.value);
        if let Some(tag) = &self.language {
            term.push('@');
            term.push_str(tag);
        }
        term
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

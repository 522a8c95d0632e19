//! Lexical forms: string escaping, delimiter choice, IRI and language-tag
//! checks, and the bare forms of the numeric and boolean XML Schema types.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Delimiter for strings that hold a newline or both kinds of quote.
pub const LONG_QUOTE: &str = "\"\"\"";
pub const DOUBLE_QUOTE: &str = "\"";
pub const SINGLE_QUOTE: &str = "'";

static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:-[A-Za-z0-9]+)*$").expect("language tag regex"));

static BOOLEAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:true|false)$").expect("boolean regex"));

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer regex"));

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]*\.[0-9]+$").expect("decimal regex"));

static DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.[0-9]*|\.[0-9]+|[0-9]+)[eE][+-]?[0-9]+$").expect("double regex")
});

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Escape a string for a SPARQL string literal (ECHAR).
///
/// Linefeeds are left as they are: they are legal inside `"""` and
/// [`choose_delimiter`] picks that delimiter whenever one is present.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// Pick the delimiter for the unescaped string `s`.
pub fn choose_delimiter(s: &str) -> &'static str {
    let has_single = s.contains('\'');
    let has_double = s.contains('"');

    if s.contains('\n') || (has_single && has_double) {
        LONG_QUOTE
    } else if has_single {
        DOUBLE_QUOTE
    } else {
        SINGLE_QUOTE
    }
}

/// True when `delimiter` never occurs in `escaped` outside an escape sequence.
pub fn delimiter_is_safe(escaped: &str, delimiter: &str) -> bool {
    let mut rest = escaped;
    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            // Skip the backslash and whatever it escapes.
            let mut chars = rest.chars();
            chars.next();
            chars.next();
            rest = chars.as_str();
            continue;
        }
        if rest.starts_with(delimiter) {
            return false;
        }
        rest = &rest[c.len_utf8()..];
    }
    true
}

/// Quote and escape `value` as a SPARQL string literal.
///
/// # Panics
///
/// Panics if the chosen delimiter still occurs unescaped, which would mean
/// [`escape_string`] missed a character.
pub fn format_string(value: &str) -> String {
    let escaped = escape_string(value);
    let delimiter = choose_delimiter(value);

    assert!(
        delimiter_is_safe(&escaped, delimiter),
        "found `{delimiter}` in `{escaped}`"
    );
    format!("{delimiter}{escaped}{delimiter}")
}

/// Reject values holding U+0000, which no SPARQL string can carry.
pub fn ensure_safe_string(value: &str) -> Result<&str> {
    if value.contains('\0') {
        return Err(Error::NulInLiteral);
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// IRIs and language tags
// ---------------------------------------------------------------------------

/// Reject URIs that would break out of `<...>` in generated text.
pub fn ensure_safe_iri(uri: &str) -> Result<&str> {
    if uri.contains(['\0', '\n', '>']) {
        return Err(Error::UnsafeIri(uri.to_string()));
    }
    Ok(uri)
}

/// LANGTAG production: `[A-Za-z]+(-[A-Za-z0-9]+)*`.
pub fn valid_language_tag(tag: &str) -> bool {
    LANGUAGE_TAG.is_match(tag)
}

// ---------------------------------------------------------------------------
// Built-in datatypes
// ---------------------------------------------------------------------------

/// XML Schema types that SPARQL can write without quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalType {
    Boolean,
    Integer,
    Decimal,
    Double,
}

impl LexicalType {
    /// Map an `xsd` local name to its type.
    pub fn from_xsd_local(local: &str) -> Option<Self> {
        use crate::model::vocab::xsd;

        match local {
            xsd::BOOLEAN => Some(LexicalType::Boolean),
            xsd::INTEGER => Some(LexicalType::Integer),
            xsd::DECIMAL => Some(LexicalType::Decimal),
            xsd::DOUBLE => Some(LexicalType::Double),
            _ => None,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            LexicalType::Boolean => &BOOLEAN,
            LexicalType::Integer => &INTEGER,
            LexicalType::Decimal => &DECIMAL,
            LexicalType::Double => &DOUBLE,
        }
    }

    /// Whether `value` is already in this type's bare lexical form.
    pub fn matches(self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

/// Bare lexical form of `value` as `ty`, or `None` if it doesn't fit.
pub fn try_format_type(value: &str, ty: LexicalType) -> Option<String> {
    if ty == LexicalType::Double {
        return try_format_double(value);
    }
    ty.matches(value).then(|| value.to_string())
}

/// Coerce `value` into a double literal, appending `e0` if needed.
pub fn try_format_double(value: &str) -> Option<String> {
    if LexicalType::Double.matches(value) {
        return Some(value.to_string());
    }
    let coerced = format!("{value}e0");
    LexicalType::Double.matches(&coerced).then_some(coerced)
}

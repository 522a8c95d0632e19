//! Rough query/update classification of statement text.
//!
//! This is a heuristic, not a parser: it skips leading `PREFIX`/`BASE`
//! clauses by shape and looks at the next word. SPARQL endpoints take
//! queries and updates through different protocol parameters, so this is
//! all the grammar the client needs. Everything goes through [`classify`],
//! so a real parser can replace the regex without touching callers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

// Derived from http://www.w3.org/TR/sparql11-query/#rQueryUnit
static LEADING_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\s*(?:PREFIX|BASE)[^<]+<[^>]+>)*\s*(\w+)").expect("keyword regex")
});

const UPDATE_KEYWORDS: &[&str] = &[
    "LOAD", "CLEAR", "DROP", "CREATE", "ADD", "MOVE", "COPY", "INSERT", "DELETE", "WITH",
];

/// Whether a statement reads or mutates the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Query,
    Update,
}

impl StatementKind {
    /// Form field the SPARQL protocol expects the text in.
    pub fn protocol_field(self) -> &'static str {
        match self {
            StatementKind::Query => "query",
            StatementKind::Update => "update",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol_field())
    }
}

/// Classify `text` by its first keyword after the prologue.
pub fn classify(text: &str) -> Result<StatementKind> {
    let keyword = LEADING_KEYWORD
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
        .ok_or_else(|| Error::MalformedStatement(text.to_string()))?;

    // A prologue clause that lacks its IRI leaves no operative keyword.
    if keyword == "PREFIX" || keyword == "BASE" {
        return Err(Error::MalformedStatement(text.to_string()));
    }

    let kind = if UPDATE_KEYWORDS.contains(&keyword.as_str()) {
        StatementKind::Update
    } else {
        StatementKind::Query
    };
    debug!(%keyword, %kind, "classified statement");
    Ok(kind)
}

pub fn statement_is_update(text: &str) -> Result<bool> {
    classify(text).map(|kind| kind == StatementKind::Update)
}

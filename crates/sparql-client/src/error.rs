//! Error types shared by the term model, the registry and the client.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or sending a statement.
///
/// Term and registry errors are returned at the call that breaks an
/// invariant. Execution errors (malformed statement, transport failure,
/// unreadable response) only ever surface through the future returned by
/// [`Query::execute`](crate::query::template::Query::execute).
#[derive(Debug, Error)]
pub enum Error {
    /// IRI input was neither a URI nor a single-entry prefixed name.
    #[error("invalid IRI: {0}")]
    InvalidIri(String),

    /// URI would break out of its `<...>` delimiters.
    #[error("refusing to use suspicious IRI: {0:?}")]
    UnsafeIri(String),

    #[error("refusing to encode string with null character")]
    NulInLiteral,

    /// Literal datatype could not be turned into an IRI.
    #[error("datatype must be a URI or a single-entry prefixed name, got {0}")]
    InvalidDatatype(String),

    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),

    /// Name is not in the well-known prefix table.
    #[error("`{0}` is not a known prefix")]
    UnknownPrefix(String),

    /// Classifier found no operative keyword.
    #[error("malformed statement: {0:?}")]
    MalformedStatement(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Failures reported by a [`Transport`](crate::transport::Transport).
///
/// The display text is the generic message callers see; the detail is kept
/// for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Could not connect to SPARQL endpoint.")]
    Connect { detail: String },

    #[error("SPARQL query failed.")]
    Failed { status: Option<u16>, detail: String },
}

impl TransportError {
    /// Underlying cause, as reported by the HTTP layer or the endpoint.
    pub fn detail(&self) -> &str {
        match self {
            TransportError::Connect { detail } | TransportError::Failed { detail, .. } => detail,
        }
    }
}

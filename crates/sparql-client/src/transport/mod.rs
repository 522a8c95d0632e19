pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result, TransportError};
use crate::query::classify::StatementKind;

/// Finished statement text with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub kind: StatementKind,
}

/// Per-execution request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Extra protocol parameters, e.g. `default-graph-uri` or `timeout`.
    pub parameters: Vec<(String, String)>,
}

impl ExecuteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }
}

/// Sends finished statements to an endpoint.
///
/// Implementations own everything network related (connection handling,
/// timeouts, retries). The response body is returned untouched.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        statement: &Statement,
        options: &ExecuteOptions,
    ) -> std::result::Result<String, TransportError>;
}

/// Parse a raw response body. Empty bodies, common for updates, become `null`.
pub fn parse_response(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|_| Error::InvalidResponse("Could not parse response body.".to_string()))
}

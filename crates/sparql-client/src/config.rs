//! Client configuration, loadable from TOML.
//!
//! ```toml
//! endpoint = "http://localhost:3030/ds/sparql"
//! timeout_secs = 10
//! base = "http://example.org/"
//! common_prefixes = ["rdf", "xsd"]
//!
//! [[prefixes]]
//! name = "ex"
//! uri = "http://example.org/ns#"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::query::registry::Registry;

/// Wildcard in `common_prefixes` selecting the whole well-known table.
pub const ALL_COMMON_PREFIXES: &str = "*";

/// One `[[prefixes]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrefixEntry {
    pub name: String,
    pub uri: String,
}

/// Settings for [`SparqlClient`](crate::client::SparqlClient) and its HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub accept: String,
    pub base: Option<String>,
    pub common_prefixes: Vec<String>,
    pub prefixes: Vec<PrefixEntry>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: 30,
            user_agent: format!("sparql-client/{}", env!("CARGO_PKG_VERSION")),
            accept: "application/sparql-results+json,application/json".to_string(),
            base: None,
            common_prefixes: Vec::new(),
            prefixes: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Default settings for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("TOML parse error: {e}")))
    }

    /// Load a TOML config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Registry described by `base`, `common_prefixes` and `prefixes`, in
    /// that order.
    pub fn registry(&self) -> Result<Registry> {
        let mut registry = Registry::new();

        if let Some(base) = &self.base {
            registry.set_base(base.as_str());
        }

        if self.common_prefixes.iter().any(|name| name == ALL_COMMON_PREFIXES) {
            registry.register_common(&[])?;
        } else if !self.common_prefixes.is_empty() {
            let names: Vec<&str> = self.common_prefixes.iter().map(String::as_str).collect();
            registry.register_common(&names)?;
        }

        for entry in &self.prefixes {
            registry.add_prefix(entry.name.as_str(), entry.uri.as_str());
        }
        Ok(registry)
    }
}

//! The client: a persistent registry plus a transport to hand statements to.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::query::registry::{Registration, Registry};
use crate::query::template::Query;
use crate::transport::http::HttpTransport;
use crate::transport::Transport;

/// Entry point for building and running statements.
///
/// Declarations registered here are copied into every [`Query`] created
/// afterwards. Changing them later does not affect queries that already
/// exist.
pub struct SparqlClient {
    registry: Registry,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for SparqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparqlClient")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl SparqlClient {
    /// HTTP client for `endpoint` with default settings.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_config(&ClientConfig::new(endpoint))
    }

    /// HTTP client with the registry described by `config`.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        let mut client = Self::with_transport(transport);
        client.registry = config.registry()?;
        debug!(endpoint = %config.endpoint, "created client");
        Ok(client)
    }

    /// Client over any [`Transport`], starting with an empty registry.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            registry: Registry::new(),
            transport: Arc::new(transport),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// See [`Registry::register`].
    pub fn register(&mut self, registration: impl Into<Registration>) -> &mut Self {
        self.registry.register(registration);
        self
    }

    /// See [`Registry::register_common`].
    pub fn register_common(&mut self, names: &[&str]) -> Result<&mut Self> {
        self.registry.register_common(names)?;
        Ok(self)
    }

    /// Start a statement from `text`, snapshotting the current registry.
    pub fn query(&self, text: impl Into<String>) -> Query {
        Query::new(text.into(), self.registry.clone(), Arc::clone(&self.transport))
    }
}

//! Build SPARQL statements from typed terms and reusable templates, and send
//! them to a SPARQL 1.1 Protocol endpoint.
//!
//! ```no_run
//! use sparql_client::{SparqlClient, StringLiteral};
//!
//! # async fn run() -> sparql_client::Result<()> {
//! let mut client = SparqlClient::new("http://localhost:3030/ds/sparql")?;
//! client.register_common(&["rdfs"])?;
//!
//! let rows = client
//!     .query("SELECT ?s WHERE { ?s rdfs:label ?label }")
//!     .bind_term("label", StringLiteral::with_language("Cat", "en")?)
//!     .execute()
//!     .await?;
//! println!("{rows}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod transport;

pub use client::SparqlClient;
pub use config::ClientConfig;
pub use error::{Error, Result, TransportError};
pub use model::{Iri, IriSource, Literal, StringLiteral, Term};
pub use query::{Query, Registration, Registry, StatementKind};
pub use transport::{ExecuteOptions, Statement, Transport};

//! Query templates: placeholder binding, preamble assembly and execution.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::term::Term;
use crate::query::classify::{classify, StatementKind};
use crate::query::registry::{Registration, Registry};
use crate::transport::{parse_response, ExecuteOptions, Statement, Transport};

/// A single statement on its way to the endpoint.
///
/// Created by [`SparqlClient::query`](crate::client::SparqlClient::query)
/// with its own copy of the client's registry. Builder methods take and
/// return `self`; [`execute`](Self::execute) consumes the query.
pub struct Query {
    original: String,
    text: String,
    registry: Registry,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("original", &self.original)
            .field("text", &self.text)
            .field("registry", &self.registry)
            .finish()
    }
}

impl Query {
    pub(crate) fn new(text: String, registry: Registry, transport: Arc<dyn Transport>) -> Self {
        Self {
            text: text.clone(),
            original: text,
            registry,
            transport,
        }
    }

    /// Template text as given.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Template text with the bindings applied so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // -----------------------------------------------------------------------
    // Bindings
    // -----------------------------------------------------------------------

    /// Replace every `?placeholder` that is followed by whitespace with
    /// `replacement` and a single space.
    pub fn bind(mut self, placeholder: &str, replacement: impl AsRef<str>) -> Self {
        self.text = substitute(&self.text, placeholder, replacement.as_ref());
        self
    }

    /// [`bind`](Self::bind) with the lexical form of `term`.
    pub fn bind_term(self, placeholder: &str, term: impl Into<Term>) -> Self {
        let formatted = term.into().format();
        self.bind(placeholder, formatted)
    }

    // -----------------------------------------------------------------------
    // Per-query declarations
    // -----------------------------------------------------------------------

    /// Like [`Registry::register`], on this query's registry only.
    pub fn register(mut self, registration: impl Into<Registration>) -> Self {
        self.registry.register(registration);
        self
    }

    /// Like [`Registry::register_common`], on this query's registry only.
    pub fn register_common(mut self, names: &[&str]) -> Result<Self> {
        self.registry.register_common(names)?;
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    /// Final wire text: preamble followed by the bound template.
    pub fn render(&self) -> Result<String> {
        let preamble = self.registry.preamble()?;
        Ok(preamble + &self.text)
    }

    /// Classification of the final wire text.
    pub fn kind(&self) -> Result<StatementKind> {
        classify(&self.render()?)
    }

    /// Send the statement with default options.
    pub async fn execute(self) -> Result<Value> {
        self.execute_with(ExecuteOptions::default()).await
    }

    /// Render, classify and send the statement, then parse the response.
    ///
    /// All failures, including a preamble with an unsafe IRI or a statement
    /// with no keyword, come back through the returned future.
    pub async fn execute_with(self, options: ExecuteOptions) -> Result<Value> {
        let text = self.render()?;
        let kind = classify(&text)?;
        debug!(%kind, bytes = text.len(), "executing statement");

        let statement = Statement { text, kind };
        let body = self
            .transport
            .send(&statement, &options)
            .await
            .inspect_err(|e| warn!(detail = e.detail(), "{e}"))?;

        parse_response(&body)
    }

    /// Run [`execute_with`](Self::execute_with) on a new task and hand the
    /// outcome to `callback` exactly once.
    ///
    /// The callback never runs on the caller's stack. Must be called from
    /// within a tokio runtime.
    pub fn execute_callback<F>(self, options: ExecuteOptions, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Value>) + Send + 'static,
    {
        tokio::spawn(async move {
            let outcome = self.execute_with(options).await;
            callback(outcome);
        })
    }
}

/// Replace `?placeholder` plus its trailing whitespace run with
/// `replacement` and one space. Occurrences without trailing whitespace are
/// left alone.
fn substitute(text: &str, placeholder: &str, replacement: &str) -> String {
    let needle = format!("?{placeholder}");
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(&needle) {
        let after = &rest[pos + needle.len()..];
        let trimmed = after.trim_start();
        if trimmed.len() == after.len() {
            out.push_str(&rest[..pos + needle.len()]);
        } else {
            out.push_str(&rest[..pos]);
            out.push_str(replacement);
            out.push(' ');
        }
        rest = trimmed;
    }
    out.push_str(rest);
    out
}

//! SPARQL 1.1 Protocol over HTTP POST with a form-encoded body.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

use super::{ExecuteOptions, Statement, Transport};
use crate::config::ClientConfig;
use crate::error::{Error, Result, TransportError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Parameters sent with every request.
const DEFAULT_PARAMETERS: &[(&str, &str)] = &[
    ("format", "application/sparql-results+json"),
    ("content-type", "application/sparql-results+json"),
];

/// Everything but the RFC 3986 unreserved characters is encoded.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// POSTs statements to a single endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    accept: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .field("accept", &self.accept)
            .finish()
    }
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            accept: config.accept.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `key=value&...` with both sides percent-encoded.
pub fn encode_form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM_ENCODE_SET),
                utf8_percent_encode(value, FORM_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn map_network_error(e: reqwest::Error) -> TransportError {
    if e.is_connect() {
        TransportError::Connect {
            detail: e.to_string(),
        }
    } else {
        TransportError::Failed {
            status: None,
            detail: e.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        statement: &Statement,
        options: &ExecuteOptions,
    ) -> std::result::Result<String, TransportError> {
        let mut pairs: Vec<(&str, &str)> =
            vec![(statement.kind.protocol_field(), statement.text.as_str())];
        pairs.extend(DEFAULT_PARAMETERS.iter().copied());
        pairs.extend(
            options
                .parameters
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
        let body = encode_form(pairs);

        debug!(endpoint = %self.endpoint, kind = %statement.kind, "sending statement");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, &self.accept)
            .body(body)
            .send()
            .await
            .map_err(map_network_error)
            .inspect_err(|e| warn!(endpoint = %self.endpoint, detail = e.detail(), "{e}"))?;

        let status = response.status();
        let text = response.text().await.map_err(map_network_error)?;

        if status.as_u16() >= 300 {
            warn!(endpoint = %self.endpoint, %status, "endpoint rejected statement");
            return Err(TransportError::Failed {
                status: Some(status.as_u16()),
                detail: text,
            });
        }
        Ok(text)
    }
}

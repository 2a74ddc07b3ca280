use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};

use solrkit_core::codec;
use solrkit_core::config::ConnectionConfig;
use solrkit_core::transport::{HttpTransport, Method, Transport};
use solrkit_core::{Error, Result};

/// Solr core client
///
/// Holds the connection identity (host, port, core name) and performs
/// single-round-trip requests against the core's handlers. The identity is
/// immutable after construction.
pub struct Client {
    host: String,
    port: u16,
    core: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Connect to the core at `http://{host}:{port}/solr/{core}`
    ///
    /// Validates that the host is non-empty and the port is in 1-65535.
    /// No request is made yet; the HTTP client is built up front and reused
    /// for every call.
    pub fn connect(host: impl Into<String>, port: u32, core: impl Into<String>) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Self::with_transport(host, port, core, transport)
    }

    /// Connect using a loaded [`ConnectionConfig`]
    pub fn from_config(config: &ConnectionConfig) -> Result<Self> {
        let transport: Arc<dyn Transport> = match config.timeout_secs {
            Some(secs) => Arc::new(HttpTransport::with_timeout(Duration::from_secs(secs))?),
            None => Arc::new(HttpTransport::new()?),
        };
        Self::with_transport(
            config.host.clone(),
            config.port,
            config.core.clone(),
            transport,
        )
    }

    /// Connect with a caller-supplied transport
    pub fn with_transport(
        host: impl Into<String>,
        port: u32,
        core: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let host = host.into();
        if host.is_empty() {
            return Err(Error::InvalidHost(host));
        }
        if port == 0 || port > 65535 {
            return Err(Error::InvalidPort(port));
        }

        Ok(Self {
            host,
            port: port as u16,
            core: core.into(),
            transport,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn core(&self) -> &str {
        &self.core
    }

    /// Build the URL for a request handler on this core
    ///
    /// Handler names are used as-is; no percent-encoding is applied, so the
    /// caller supplies URL-safe names (e.g. "select", "admin/ping").
    pub fn handler_url(&self, handler: &str) -> String {
        format!(
            "http://{}:{}/solr/{}/{}",
            self.host, self.port, self.core, handler
        )
    }

    /// Health-check the core through the given handler (e.g. "admin/ping")
    ///
    /// Returns the decoded response object for any HTTP status; the caller
    /// inspects the content. Fails if the body is not a JSON object.
    pub async fn ping(&self, handler: &str) -> Result<Map<String, Value>> {
        let url = self.handler_url(handler);
        tracing::debug!(%url, "pinging core");

        let body = self.transport.request(Method::GET, &url, None, None).await?;
        let response = codec::decode_object(&body)?;

        tracing::debug!(core = %self.core, "ping response decoded");
        Ok(response)
    }

    /// Send an update request (index, delete, commit) to the core
    ///
    /// The body is passed through untouched and headers are forwarded
    /// verbatim. `commit` controls whether the update is made visible to
    /// searches immediately. Like [`Client::ping`], the response object is
    /// returned for any HTTP status so Solr error bodies stay inspectable.
    pub async fn update(
        &self,
        handler: &str,
        body: Vec<u8>,
        commit: bool,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Map<String, Value>> {
        let mut url = self.handler_url(handler);
        if commit {
            url.push_str("?commit=true&wt=json");
        } else {
            url.push_str("?commit=false&wt=json");
        }
        tracing::debug!(%url, bytes = body.len(), "sending update");

        let body = self
            .transport
            .request(Method::POST, &url, headers.as_ref(), Some(body))
            .await?;
        let response = codec::decode_object(&body)?;

        tracing::debug!(core = %self.core, "update response decoded");
        Ok(response)
    }
}

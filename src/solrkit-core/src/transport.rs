use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::Result;

pub use reqwest::Method;

/// Transport trait for performing a single HTTP exchange
///
/// Implementations execute one request and buffer the whole response body.
/// The HTTP status code is not inspected at this layer: any response whose
/// body can be read is a success, so callers keep access to error bodies.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>>;
}

/// reqwest-backed transport
///
/// The inner client is built eagerly at construction and reused for every
/// request, so connection reuse is handled by reqwest's pool.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Build a transport that applies a per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let mut request = self.client.request(method, url);

        if let Some(headers) = headers {
            for (key, value) in headers {
                // RequestBuilder::header appends, so repeated keys accumulate
                request = request.header(key, value);
            }
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        tracing::debug!(status = %response.status(), "response received");

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(HttpTransport::new().is_ok());
    }

    #[test]
    fn test_transport_creation_with_timeout() {
        assert!(HttpTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_malformed_url_is_transport_error() {
        let transport = HttpTransport::new().unwrap();
        let err = transport
            .request(Method::GET, "not a url", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Transport(_)));
    }
}

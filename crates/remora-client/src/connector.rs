//! Connector: session creation against a configured server base URL.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::session::Session;
use crate::transport::execute;
use crate::types::{CreateSessionResponse, Empty};

/// Entry point for a remote browser-automation server.
///
/// Holds a normalized base URL and a shared HTTP client; immutable after
/// construction. Create one per server and mint sessions from it.
///
/// The base URL is normalized at construction: trailing slashes are stripped
/// and every request path is joined with an explicit `/Session...` segment,
/// so `"http://host:8081"` and `"http://host:8081/"` address the same server.
#[derive(Debug, Clone)]
pub struct Connector {
    base_url: String,
    client: Client,
}

impl Connector {
    /// Create a connector with the default HTTP client.
    ///
    /// The default client carries no timeout; use [`Connector::builder`] to
    /// set one.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder(base_url).build()
    }

    /// Start building a connector with a custom timeout or HTTP client.
    pub fn builder(base_url: impl Into<String>) -> ConnectorBuilder {
        ConnectorBuilder {
            base_url: base_url.into(),
            timeout: None,
            client: None,
        }
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new browser session on the server.
    ///
    /// POSTs an empty JSON object to `{base}/Session` and parses the returned
    /// `sessionId` into a [`Session`] handle sharing this connector's HTTP
    /// client.
    pub async fn create_session(&self) -> Result<Session> {
        let url = format!("{}/Session", self.base_url);
        debug!(url = %url, "creating browser session");

        let response = execute(&self.client, self.client.post(&url).json(&Empty {})).await?;
        let body = response.text().await.map_err(ClientError::Transport)?;
        let parsed: CreateSessionResponse = serde_json::from_str(&body)?;
        let id = Uuid::parse_str(&parsed.session_id)
            .map_err(|e| ClientError::SessionId(parsed.session_id.clone(), e))?;

        debug!(session = %id, "session created");
        Ok(Session::new(id, self.base_url.clone(), self.client.clone()))
    }
}

/// Builder for [`Connector`] transport settings.
#[derive(Debug)]
pub struct ConnectorBuilder {
    base_url: String,
    timeout: Option<Duration>,
    client: Option<Client>,
}

impl ConnectorBuilder {
    /// Per-request timeout on the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a caller-provided HTTP client. Overrides `timeout`.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Connector {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().unwrap_or_else(|e| {
                    warn!(error = %e, "Failed to build HTTP client, using default");
                    Client::new()
                })
            }
        };

        Connector {
            base_url: normalize_base_url(self.base_url),
            client,
        }
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let connector = Connector::new("http://localhost:8081/");
        assert_eq!(connector.base_url(), "http://localhost:8081");

        let connector = Connector::new("http://localhost:8081///");
        assert_eq!(connector.base_url(), "http://localhost:8081");
    }

    #[test]
    fn base_url_without_trailing_slash_is_unchanged() {
        let connector = Connector::new("http://localhost:8081");
        assert_eq!(connector.base_url(), "http://localhost:8081");
    }

    #[test]
    fn builder_with_timeout_builds() {
        let connector = Connector::builder("http://localhost:8081")
            .timeout(Duration::from_secs(30))
            .build();
        assert_eq!(connector.base_url(), "http://localhost:8081");
    }

    #[test]
    fn builder_accepts_custom_client() {
        let client = Client::new();
        let connector = Connector::builder("http://localhost:8081")
            .client(client)
            .build();
        assert_eq!(connector.base_url(), "http://localhost:8081");
    }
}

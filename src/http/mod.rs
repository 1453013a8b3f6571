//! Blocking `reqwest` implementation of [`Transport`].
//!
//! Non-2xx responses become a [`TransportError`] carrying the response
//! body, so the service's own error text reaches the caller. Error text
//! never includes the request URL, which carries the token.

use std::time::Duration;

use crate::client::{HubError, Transport, TransportError};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("hubdev/", env!("CARGO_PKG_VERSION"));

/// Transport over a shared `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, HubError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| HubError::TransportFailure(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client (proxies, custom TLS roots).
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

fn failure(e: reqwest::Error) -> TransportError {
    TransportError::new(e.without_url().to_string())
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        let mut request = self.client.get(url);
        if !timeout.is_zero() {
            request = request.timeout(timeout);
        }
        let resp = request.send().map_err(failure)?;

        let status = resp.status();
        let body = resp.text().map_err(failure)?;

        if !status.is_success() {
            return Err(TransportError::with_body(format!("HTTP {status}"), body));
        }
        Ok(body)
    }
}

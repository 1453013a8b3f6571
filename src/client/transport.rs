//! The HTTP seam: the client builds URLs, a [`Transport`] fetches them.

use std::fmt;
use std::time::Duration;

/// Failure reported by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// Transport-level description (connection refused, timeout, status line).
    pub message: String,
    /// Response body captured on a non-2xx status, if any.
    pub body: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            body: None,
        }
    }

    pub fn with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            body: Some(body.into()),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

/// Synchronous GET capability.
///
/// Implementations return the body of a 2xx response, or a
/// [`TransportError`] carrying the body of any other response they received.
/// The client issues at most one call per operation and never retries.
/// A `timeout` of [`Duration::ZERO`] means no limit.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        (**self).get(url, timeout)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        (**self).get(url, timeout)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
        (**self).get(url, timeout)
    }
}

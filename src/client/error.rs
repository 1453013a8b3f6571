use thiserror::Error;

use super::config::ResponseFormat;
use super::transport::TransportError;
use crate::core::IdentifierError;

/// Default message when the service signals failure without saying why.
pub const UNKNOWN_SERVICE_ERROR: &str = "unknown service error";

/// Errors returned by [`HubClient`](super::HubClient) operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HubError {
    /// An identifier or date failed local validation. No request was sent.
    #[error("{message}")]
    InvalidIdentifier {
        /// Fixed, operation-specific message (e.g. "invalid CNPJ").
        message: String,
        #[source]
        source: IdentifierError,
    },

    /// A required shipping-quote parameter was not supplied.
    #[error("parameter {0} is required")]
    MissingParameter(String),

    /// Network error, timeout, or non-2xx status.
    #[error("request failed: {0}")]
    TransportFailure(String),

    /// The body could not be decoded under the configured format.
    #[error("malformed {format} response: {detail}")]
    MalformedPayload {
        format: ResponseFormat,
        detail: String,
    },

    /// The service answered with `return = NOK`.
    #[error("service error: {0}")]
    ServiceReportedFailure(String),

    /// The configured response format is neither `json` nor `xml`.
    #[error("unsupported response format: {0}")]
    UnsupportedFormat(String),
}

impl HubError {
    pub(crate) fn invalid(message: &str, source: IdentifierError) -> Self {
        Self::InvalidIdentifier {
            message: message.to_string(),
            source,
        }
    }
}

impl From<TransportError> for HubError {
    /// The captured remote body wins over the transport's own message.
    fn from(e: TransportError) -> Self {
        Self::TransportFailure(e.body.filter(|b| !b.is_empty()).unwrap_or(e.message))
    }
}

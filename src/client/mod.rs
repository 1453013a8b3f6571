//! Request orchestration: endpoint construction, transport call, decoding.
//!
//! # Example
//!
//! ```no_run
//! use hubdev::client::{HubClient, HubConfig, Transport, TransportError};
//! use std::time::Duration;
//!
//! struct MyTransport;
//!
//! impl Transport for MyTransport {
//!     fn get(&self, url: &str, timeout: Duration) -> Result<String, TransportError> {
//!         todo!("GET {url} within {timeout:?}")
//!     }
//! }
//!
//! let client = HubClient::with_transport(HubConfig::new("my-token"), MyTransport);
//! let payload = client.company("00.000.000/0001-91")?;
//! println!("{:?}", payload.result_json());
//! # Ok::<(), hubdev::client::HubError>(())
//! ```

mod config;
mod error;
mod hub;
mod operation;
mod query;
mod response;
mod shipping;
mod transport;
mod xml;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_FORMAT, ENV_TIMEOUT, ENV_TOKEN, HubConfig,
    ResponseFormat,
};
pub use error::{HubError, UNKNOWN_SERVICE_ERROR};
pub use hub::HubClient;
pub use operation::{
    MSG_INVALID_BIRTH_DATE, MSG_INVALID_CEP, MSG_INVALID_CNPJ, MSG_INVALID_CPF,
    MSG_INVALID_MUNICIPAL_CODE, Operation, StateRegistrationMode,
};
pub use query::{Endpoint, Query};
pub use response::{Payload, RETURN_NOK, RETURN_OK, ResponseEnvelope, decode};
pub use shipping::{PackageFormat, REQUIRED_SHIPPING_PARAMS, ShippingQuote};
pub use transport::{Transport, TransportError};
pub use xml::XmlElement;

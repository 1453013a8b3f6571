//! # hubdev
//!
//! Client for the Hub do Desenvolvedor API: Brazilian company (CNPJ) and
//! individual (CPF) registry lookups, postal codes (CEP), IBGE municipality
//! codes, Correios shipping quotes and account balance.
//!
//! Identifiers are validated locally (check digits, lengths, calendar dates)
//! before any request is built, so malformed input never costs a query.
//!
//! ## Quick Start
//!
//! ```rust
//! use hubdev::core::*;
//!
//! let cnpj = validate_cnpj("00.000.000/0001-91").unwrap();
//! assert_eq!(cnpj.as_str(), "00000000000191");
//!
//! assert!(validate_cpf("123.456.789-09").is_ok());
//! assert!(validate_cep("01001-000").is_ok());
//! assert!(validate_date("31/02/1990").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Identifier types and validation (depends only on `chrono` and `serde`) |
//! | `client` (default) | Endpoint construction, JSON/XML decoding, [`client::HubClient`] |
//! | `http` | Blocking `reqwest` transport |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "http")]
pub mod http;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

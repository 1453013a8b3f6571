//! Identifier types and offline validation.
//!
//! Everything here is pure: no I/O, no allocation beyond the normalized
//! values. The client module runs these checks before building a request,
//! so an invalid identifier never reaches the network.

mod error;
mod types;
mod validation;

pub use error::*;
pub use types::*;
pub use validation::*;

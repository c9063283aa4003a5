//! Airdrop request handling.
//!
//! # Data Flow
//! ```text
//! RawAirdropRequest (JSON or form body)
//!     → validator.rs (amount → address → network, first failure wins)
//!     → forwarder.rs (requestAirdrop → confirm at "confirmed")
//!     → AirdropResult | AirdropError
//! ```

pub mod error;
pub mod forwarder;
pub mod types;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use error::AirdropError;
pub use forwarder::Forwarder;
pub use types::{AirdropRequest, AirdropResult, Amount, RawAirdropRequest};
pub use validator::{decode_address, validate, AddressError};

//! Request validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! amount, then address, then network. Nothing here performs I/O.

use serde_json::Value;
use thiserror::Error;

use crate::airdrop::error::AirdropError;
use crate::airdrop::types::{AirdropRequest, Amount, RawAirdropRequest};
use crate::blockchain::types::PUBKEY_BYTES;
use crate::blockchain::{Network, Pubkey};

/// Exclusive upper bound for a single airdrop, in SOL.
pub const MAX_AIRDROP_SOL: f64 = 10.0;

/// Why a string is not a valid account identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("not valid base58: {0}")]
    Base58(String),

    #[error("decoded to {0} bytes, expected 32")]
    Length(usize),
}

/// Validate a raw request.
pub fn validate(raw: &RawAirdropRequest) -> Result<AirdropRequest, AirdropError> {
    let amount = parse_amount(raw.amount.as_ref())?;
    let (address, recipient) = parse_address(raw.address.as_ref())?;
    let network = parse_network(raw.network.as_ref())?;

    Ok(AirdropRequest {
        network,
        amount,
        recipient,
        address,
    })
}

/// Amount must be numeric and strictly between 0 and 10 SOL, and worth at
/// least one lamport.
///
/// Accepts JSON numbers and numeric strings (form bodies carry strings).
/// A blank string reads as zero.
pub fn parse_amount(value: Option<&Value>) -> Result<Amount, AirdropError> {
    let (sol, display) = match value {
        Some(Value::Number(n)) => {
            let sol = n.as_f64().ok_or(AirdropError::InvalidAmount)?;
            (sol, display_number(sol))
        }
        Some(Value::String(s)) if !s.is_empty() => {
            let trimmed = s.trim();
            let sol = if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().map_err(|_| AirdropError::InvalidAmount)?
            };
            (sol, s.clone())
        }
        _ => return Err(AirdropError::InvalidAmount),
    };

    if !sol.is_finite() || sol <= 0.0 || sol >= MAX_AIRDROP_SOL {
        return Err(AirdropError::InvalidAmount);
    }

    let amount = Amount::new(sol, display);
    if amount.lamports() == 0 {
        return Err(AirdropError::InvalidAmount);
    }

    Ok(amount)
}

/// Shortest decimal form, switching to exponent notation below 1e-6.
fn display_number(n: f64) -> String {
    if n != 0.0 && n.abs() < 1e-6 {
        format!("{:e}", n)
    } else {
        n.to_string()
    }
}

fn parse_address(value: Option<&Value>) -> Result<(String, Pubkey), AirdropError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => {
            let pubkey = decode_address(s).map_err(|_| AirdropError::InvalidAddress)?;
            Ok((s.clone(), pubkey))
        }
        _ => Err(AirdropError::InvalidAddress),
    }
}

/// Decode a base58 account identifier.
pub fn decode_address(address: &str) -> Result<Pubkey, AddressError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| AddressError::Base58(e.to_string()))?;
    let bytes: [u8; PUBKEY_BYTES] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| AddressError::Length(v.len()))?;
    Ok(Pubkey::new(bytes))
}

/// Network must be one of the supported identifiers.
pub fn parse_network(value: Option<&Value>) -> Result<Network, AirdropError> {
    match value {
        Some(Value::String(s)) => s.parse().map_err(|_| AirdropError::InvalidNetwork),
        _ => Err(AirdropError::InvalidNetwork),
    }
}

//! Request and response types for the airdrop endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::blockchain::{Network, Pubkey, Signature, LAMPORTS_PER_SOL};

/// Body of `POST /airdrop` before validation.
///
/// Fields stay as raw JSON values: the validator decides what counts as a
/// number or an address, so a wrongly-typed field yields the matching
/// 400 message instead of a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct RawAirdropRequest {
    pub network: Option<Value>,
    pub amount: Option<Value>,
    pub address: Option<Value>,
}

impl RawAirdropRequest {
    /// Build from a decoded JSON body.
    ///
    /// Only an object carries fields; arrays, scalars and `null` read as empty.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut map) => Self {
                network: map.remove("network"),
                amount: map.remove("amount"),
                address: map.remove("address"),
            },
            _ => Self::default(),
        }
    }

    /// Build from `application/x-www-form-urlencoded` pairs.
    ///
    /// Later duplicates win.
    pub fn from_form_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "network" => &mut raw.network,
                "amount" => &mut raw.amount,
                "address" => &mut raw.address,
                _ => continue,
            };
            *slot = Some(Value::String(value.into()));
        }
        raw
    }
}

/// A validated SOL amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    sol: f64,
    display: String,
}

impl Amount {
    pub(crate) fn new(sol: f64, display: String) -> Self {
        Self { sol, display }
    }

    pub fn sol(&self) -> f64 {
        self.sol
    }

    /// Amount in lamports, rounded to the nearest lamport.
    pub fn lamports(&self) -> u64 {
        (self.sol * LAMPORTS_PER_SOL as f64).round() as u64
    }

    /// How the amount is echoed back to the caller.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A request that passed every validation check.
#[derive(Debug, Clone)]
pub struct AirdropRequest {
    pub network: Network,
    pub amount: Amount,
    pub recipient: Pubkey,
    /// Address exactly as the caller sent it.
    pub address: String,
}

/// Success body of `POST /airdrop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropResult {
    pub success: String,
    pub signature: String,
    pub explorer_link: String,
}

impl AirdropResult {
    pub fn new(request: &AirdropRequest, signature: Signature, explorer_link: String) -> Self {
        Self {
            success: format!(
                "Successfully airdropped {} SOL to {}",
                request.amount.display(),
                request.address
            ),
            signature: signature.0,
            explorer_link,
        }
    }
}

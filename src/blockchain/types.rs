//! Chain-specific types and error definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Length of a decoded account identifier.
pub const PUBKEY_BYTES: usize = 32;

/// Networks the relay will forward airdrop requests to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Devnet,
    Testnet,
}

impl Network {
    /// Every supported network, in allow-list order.
    pub const ALL: [Network; 2] = [Network::Devnet, Network::Testnet];

    /// Cluster identifier as used by the explorer `cluster` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| BlockchainError::UnsupportedNetwork(s.to_string()))
    }
}

/// A Solana account identifier (ed25519 public key bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl Pubkey {
    pub fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

/// Transaction signature as returned by the RPC (opaque base58 text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(pub String);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Confirmation depth requested from the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

/// Errors that can occur during blockchain operations.
///
/// Display text is surfaced to callers as the `detail` of a 500 response,
/// so RPC errors render the upstream message unchanged.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// The RPC answered with a JSON-RPC error object.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// Connection, HTTP status or timeout failure talking to the RPC.
    #[error("{0}")]
    Transport(String),

    /// The RPC answered with a payload we could not interpret.
    #[error("Invalid RPC response: {0}")]
    Decode(String),

    /// Confirmation reported a transaction-level error.
    #[error("Transaction failed during confirmation.")]
    TransactionFailed(serde_json::Value),

    /// Transaction did not reach the requested commitment in time.
    #[error("Transaction {signature} was not confirmed in {secs} seconds")]
    ConfirmationTimeout { signature: String, secs: u64 },

    /// Network identifier outside the allow-list.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),
}

impl From<reqwest::Error> for BlockchainError {
    fn from(e: reqwest::Error) -> Self {
        BlockchainError::Transport(e.to_string())
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Outcome of waiting on a submitted transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationStatus {
    /// Transaction reached the requested commitment.
    Confirmed { slot: u64 },
    /// Transaction landed but carries an execution error.
    Failed(serde_json::Value),
}

//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Validated airdrop request
//!     → client.rs (JSON-RPC requestAirdrop against the network's endpoint)
//!     → client.rs (getSignatureStatuses polling until "confirmed")
//!     → types.rs (signature / confirmation status / BlockchainError)
//! ```
//!
//! # Constraints
//! - Exactly one funding call per request, never retried
//! - Confirmation is only attempted once a signature exists
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;

pub use client::{FundingRpc, SolanaRpcClient};
pub use types::{
    BlockchainError, BlockchainResult, Commitment, ConfirmationStatus, Network, Pubkey, Signature,
    LAMPORTS_PER_SOL,
};

//! Scripted `FundingRpc` for unit tests.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::blockchain::{
    BlockchainError, BlockchainResult, Commitment, ConfirmationStatus, FundingRpc, Network, Pubkey,
    Signature,
};

/// A syntactically valid devnet address.
pub const ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

enum Funding {
    Signature(&'static str),
    Error(&'static str),
}

pub struct StubRpc {
    funding: Funding,
    confirm_fails: bool,
    pub airdrop_calls: AtomicUsize,
    pub confirm_calls: AtomicUsize,
    pub last_lamports: AtomicU64,
}

impl StubRpc {
    fn new(funding: Funding, confirm_fails: bool) -> Self {
        Self {
            funding,
            confirm_fails,
            airdrop_calls: AtomicUsize::new(0),
            confirm_calls: AtomicUsize::new(0),
            last_lamports: AtomicU64::new(0),
        }
    }

    pub fn succeeding(signature: &'static str) -> Self {
        Self::new(Funding::Signature(signature), false)
    }

    pub fn failing_funding(message: &'static str) -> Self {
        Self::new(Funding::Error(message), false)
    }

    pub fn failing_confirmation(signature: &'static str) -> Self {
        Self::new(Funding::Signature(signature), true)
    }
}

#[async_trait]
impl FundingRpc for StubRpc {
    async fn request_airdrop(
        &self,
        _network: Network,
        _to: &Pubkey,
        lamports: u64,
    ) -> BlockchainResult<Signature> {
        self.airdrop_calls.fetch_add(1, Ordering::SeqCst);
        self.last_lamports.store(lamports, Ordering::SeqCst);
        match self.funding {
            Funding::Signature(sig) => Ok(Signature::from(sig)),
            Funding::Error(message) => Err(BlockchainError::Rpc {
                code: -32603,
                message: message.to_string(),
            }),
        }
    }

    async fn confirm_transaction(
        &self,
        _network: Network,
        _signature: &Signature,
        _commitment: Commitment,
    ) -> BlockchainResult<ConfirmationStatus> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        if self.confirm_fails {
            Ok(ConfirmationStatus::Failed(serde_json::json!({
                "InstructionError": [0, { "Custom": 1 }]
            })))
        } else {
            Ok(ConfirmationStatus::Confirmed { slot: 42 })
        }
    }
}

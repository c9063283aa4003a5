//! Forwarding of validated requests to the network.

use std::sync::Arc;
use std::time::Instant;

use crate::airdrop::error::AirdropError;
use crate::airdrop::types::AirdropRequest;
use crate::blockchain::{
    BlockchainError, BlockchainResult, Commitment, ConfirmationStatus, FundingRpc, Signature,
};
use crate::observability::metrics;

/// Performs the funding call and waits for its confirmation.
#[derive(Clone)]
pub struct Forwarder {
    rpc: Arc<dyn FundingRpc>,
}

impl Forwarder {
    pub fn new(rpc: Arc<dyn FundingRpc>) -> Self {
        Self { rpc }
    }

    /// Request funds for `request` and wait for the transaction to be confirmed.
    ///
    /// Returns the confirmed signature.
    pub async fn forward(&self, request: &AirdropRequest) -> Result<Signature, AirdropError> {
        let start = Instant::now();
        let outcome = self.fund(request).await;
        metrics::record_upstream_duration(request.network, start);

        outcome.map_err(|e| {
            tracing::error!(
                network = %request.network,
                recipient = %request.address,
                error = %e,
                "Error during airdrop"
            );
            AirdropError::UpstreamFailure(e)
        })
    }

    async fn fund(&self, request: &AirdropRequest) -> BlockchainResult<Signature> {
        let signature = self
            .rpc
            .request_airdrop(request.network, &request.recipient, request.amount.lamports())
            .await?;

        match self
            .rpc
            .confirm_transaction(request.network, &signature, Commitment::Confirmed)
            .await?
        {
            ConfirmationStatus::Confirmed { slot } => {
                tracing::info!(
                    network = %request.network,
                    signature = %signature,
                    slot,
                    "Airdrop confirmed"
                );
                Ok(signature)
            }
            ConfirmationStatus::Failed(err) => Err(BlockchainError::TransactionFailed(err)),
        }
    }
}

impl std::fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forwarder").finish_non_exhaustive()
    }
}

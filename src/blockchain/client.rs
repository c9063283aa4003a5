//! Solana JSON-RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Resolve the RPC endpoint for each supported network
//! - Submit `requestAirdrop` calls
//! - Poll `getSignatureStatuses` until a transaction reaches the wanted commitment
//! - Map HTTP, JSON-RPC and timeout failures to `BlockchainError`

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::time::{interval, timeout};

use crate::blockchain::types::{
    BlockchainError, BlockchainResult, Commitment, ConfirmationStatus, Network, Pubkey, Signature,
};
use crate::config::RpcConfig;

/// Upstream operations the airdrop forwarder depends on.
#[async_trait]
pub trait FundingRpc: Send + Sync {
    /// Ask the network's faucet to send `lamports` to `to`.
    async fn request_airdrop(
        &self,
        network: Network,
        to: &Pubkey,
        lamports: u64,
    ) -> BlockchainResult<Signature>;

    /// Wait until `signature` reaches `commitment` or reports an error.
    async fn confirm_transaction(
        &self,
        network: Network,
        signature: &Signature,
        commitment: Commitment,
    ) -> BlockchainResult<ConfirmationStatus>;
}

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureStatus {
    slot: u64,
    confirmations: Option<u64>,
    #[serde(default)]
    err: Option<serde_json::Value>,
    confirmation_status: Option<Commitment>,
}

impl SignatureStatus {
    /// `confirmations: null` means the slot is rooted (finalized).
    fn reached(&self, commitment: Commitment) -> bool {
        match self.confirmation_status {
            Some(status) => status >= commitment,
            None => self.confirmations.is_none(),
        }
    }
}

/// Solana JSON-RPC client.
pub struct SolanaRpcClient {
    http: reqwest::Client,
    devnet_url: String,
    testnet_url: String,
    confirmation_timeout: Duration,
    poll_interval: Duration,
    next_id: AtomicU64,
}

impl SolanaRpcClient {
    /// Create a new client from the RPC configuration.
    pub fn new(config: &RpcConfig) -> BlockchainResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        tracing::info!(
            devnet_url = %config.devnet_url,
            testnet_url = %config.testnet_url,
            "Solana RPC client initialized"
        );

        Ok(Self {
            http,
            devnet_url: config.devnet_url.clone(),
            testnet_url: config.testnet_url.clone(),
            confirmation_timeout: Duration::from_secs(config.confirmation_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            next_id: AtomicU64::new(1),
        })
    }

    /// Endpoint URL for a network.
    pub fn endpoint(&self, network: Network) -> &str {
        match network {
            Network::Devnet => &self.devnet_url,
            Network::Testnet => &self.testnet_url,
        }
    }

    async fn call<P, T>(&self, network: Network, method: &str, params: P) -> BlockchainResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .http
            .post(self.endpoint(network))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        let parsed: RpcResponse<T> = match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(BlockchainError::Transport(format!(
                    "{} {}",
                    status,
                    String::from_utf8_lossy(&body).trim()
                )));
            }
            Err(e) => return Err(BlockchainError::Decode(format!("{}: {}", method, e))),
        };

        if let Some(error) = parsed.error {
            return Err(BlockchainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| BlockchainError::Decode(format!("{}: missing result", method)))
    }

    async fn signature_status(
        &self,
        network: Network,
        signature: &Signature,
    ) -> BlockchainResult<Option<SignatureStatus>> {
        let statuses: WithContext<Vec<Option<SignatureStatus>>> = self
            .call(
                network,
                "getSignatureStatuses",
                serde_json::json!([[signature.0], { "searchTransactionHistory": false }]),
            )
            .await?;

        Ok(statuses.value.into_iter().next().flatten())
    }
}

#[async_trait]
impl FundingRpc for SolanaRpcClient {
    async fn request_airdrop(
        &self,
        network: Network,
        to: &Pubkey,
        lamports: u64,
    ) -> BlockchainResult<Signature> {
        let signature: String = self
            .call(network, "requestAirdrop", serde_json::json!([to.to_string(), lamports]))
            .await?;

        tracing::debug!(network = %network, signature = %signature, lamports, "Airdrop submitted");
        Ok(Signature(signature))
    }

    async fn confirm_transaction(
        &self,
        network: Network,
        signature: &Signature,
        commitment: Commitment,
    ) -> BlockchainResult<ConfirmationStatus> {
        let result = timeout(self.confirmation_timeout, async {
            let mut ticker = interval(self.poll_interval);

            loop {
                ticker.tick().await;

                let status = match self.signature_status(network, signature).await? {
                    Some(s) => s,
                    None => {
                        tracing::debug!(signature = %signature, "Transaction pending");
                        continue;
                    }
                };

                if let Some(err) = status.err {
                    return Ok(ConfirmationStatus::Failed(err));
                }

                if status.reached(commitment) {
                    return Ok(ConfirmationStatus::Confirmed { slot: status.slot });
                }

                tracing::debug!(
                    signature = %signature,
                    status = ?status.confirmation_status,
                    "Waiting for commitment"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(BlockchainError::ConfirmationTimeout {
                signature: signature.to_string(),
                secs: self.confirmation_timeout.as_secs(),
            }),
        }
    }
}

impl std::fmt::Debug for SolanaRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaRpcClient")
            .field("devnet_url", &self.devnet_url)
            .field("testnet_url", &self.testnet_url)
            .field("confirmation_timeout", &self.confirmation_timeout)
            .finish()
    }
}

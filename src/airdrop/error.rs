//! Airdrop request failures.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// Why an airdrop request was not fulfilled.
///
/// Display text is the message returned to the caller in the `error` field.
#[derive(Debug, Error)]
pub enum AirdropError {
    #[error("Enter appropriate amount of SOL. (Between 0.1 and 10)")]
    InvalidAmount,

    #[error("Enter a valid recipient address.")]
    InvalidAddress,

    #[error("Select a valid network.")]
    InvalidNetwork,

    /// Funding or confirmation failed upstream.
    #[error("Internal Server Error")]
    UpstreamFailure(#[source] BlockchainError),
}

impl AirdropError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AirdropError::InvalidAmount => "invalid_amount",
            AirdropError::InvalidAddress => "invalid_address",
            AirdropError::InvalidNetwork => "invalid_network",
            AirdropError::UpstreamFailure(_) => "upstream_failure",
        }
    }

    /// Underlying cause, exposed to the caller as `detail`.
    pub fn detail(&self) -> Option<String> {
        match self {
            AirdropError::UpstreamFailure(e) => Some(e.to_string()),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, AirdropError::UpstreamFailure(_))
    }
}

impl From<BlockchainError> for AirdropError {
    fn from(e: BlockchainError) -> Self {
        AirdropError::UpstreamFailure(e)
    }
}

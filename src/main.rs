//! Solana Airdrop Relay
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ http::request ──▶ airdrop::validator
//!                                                              │
//!                                                              ▼
//!     Client Response                                   airdrop::forwarder
//!     ◀────────────── http::response ◀──────────────────────────┤
//!                                                              ▼
//!                                                  blockchain::client ──▶ Solana RPC
//!                                                    requestAirdrop
//!                                                    getSignatureStatuses
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "airdrop-relay", version)]
#[command(about = "HTTP relay for Solana devnet/testnet airdrops", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "AIRDROP_RELAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    airdrop_relay::lifecycle::startup::run(args.config).await
}

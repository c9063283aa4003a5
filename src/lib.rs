//! Solana test-network airdrop relay.
//!
//! Accepts `POST /airdrop` requests, validates amount, recipient and network,
//! asks the network's JSON-RPC faucet for funds, waits for confirmation and
//! returns the signature with an explorer link.

pub mod airdrop;
pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

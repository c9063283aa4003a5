//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the airdrop relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Cross-origin header settings.
    pub cors: CorsConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Static file directory served beneath the API routes.
    pub static_files: StaticFilesConfig,

    /// Upstream Solana JSON-RPC settings.
    pub rpc: RpcConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port. Overridden by `PORT`.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Value for `Access-Control-Allow-Origin`. Overridden by `CORS_ORIGIN`.
    /// `None` or `"*"` allows any origin (credentials are then disabled).
    pub allowed_origin: Option<String>,

    /// Send `Access-Control-Allow-Credentials: true` for a concrete origin.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: None,
            allow_credentials: true,
        }
    }
}

/// Request limit configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 16 * 1024, // 16KB
        }
    }
}

/// Static file serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub enabled: bool,
    pub dir: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: "public".to_string(),
        }
    }
}

/// Upstream RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint for devnet. Overridden by `DEVNET_RPC_URL`.
    pub devnet_url: String,

    /// JSON-RPC endpoint for testnet. Overridden by `TESTNET_RPC_URL`.
    pub testnet_url: String,

    /// Timeout for a single RPC call in seconds.
    pub request_timeout_secs: u64,

    /// Deadline for a transaction to reach "confirmed" in seconds.
    pub confirmation_timeout_secs: u64,

    /// Delay between signature status polls in milliseconds.
    pub poll_interval_ms: u64,

    /// Block explorer base URL used for `explorerLink`.
    pub explorer_url: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            devnet_url: "https://api.devnet.solana.com".to_string(),
            testnet_url: "https://api.testnet.solana.com".to_string(),
            request_timeout_secs: 30,
            confirmation_timeout_secs: 30,
            poll_interval_ms: 500,
            explorer_url: "https://explorer.solana.com".to_string(),
        }
    }
}

impl RpcConfig {
    /// Explorer page for a transaction on the given cluster.
    pub fn explorer_link(
        &self,
        signature: impl std::fmt::Display,
        cluster: impl std::fmt::Display,
    ) -> String {
        format!(
            "{}/tx/{}?cluster={}",
            self.explorer_url.trim_end_matches('/'),
            signature,
            cluster
        )
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format: "pretty" or "json".
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

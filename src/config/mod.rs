//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env (dotenvy) + process environment
//! config file (TOML, optional)
//!     → loader.rs (parse, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never mutated afterwards
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CorsConfig, ListenerConfig, ObservabilityConfig, RelayConfig, RpcConfig, SecurityConfig,
    StaticFilesConfig,
};

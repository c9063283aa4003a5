//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, CORS)
//!     → request.rs (request ID, JSON/form body decoding, 16KB limit)
//!     → handlers.rs (liveness, airdrop)
//!     → response.rs (AirdropError → status + JSON body)
//!     → static directory fallback for everything else
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{AirdropBody, MakeRequestUuid, RequestIdExt, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, body limit)
//! - Serve the static directory beneath the API routes
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowHeaders, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::airdrop::Forwarder;
use crate::blockchain::{BlockchainResult, FundingRpc, SolanaRpcClient};
use crate::config::{CorsConfig, RelayConfig};
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, RequestIdExt};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub forwarder: Forwarder,
}

/// HTTP server for the airdrop relay.
pub struct HttpServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl HttpServer {
    /// Create a server backed by the Solana JSON-RPC client.
    pub fn new(config: RelayConfig) -> BlockchainResult<Self> {
        let rpc = Arc::new(SolanaRpcClient::new(&config.rpc)?);
        Ok(Self::with_rpc(config, rpc))
    }

    /// Create a server with a caller-supplied upstream client.
    pub fn with_rpc(config: RelayConfig, rpc: Arc<dyn FundingRpc>) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            forwarder: Forwarder::new(rpc),
            config: config.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::liveness))
            .route(
                "/airdrop",
                post(handlers::airdrop)
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size)),
            )
            .with_state(state);

        if config.static_files.enabled {
            router = router.fallback_service(ServeDir::new(&config.static_files.dir));
        }

        router
            .layer(cors_layer(&config.cors))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request.headers().request_id()
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// CORS headers for the configured origin.
///
/// A concrete origin may carry credentials; a wildcard never does.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request());

    match config.allowed_origin.as_deref() {
        Some(origin) if origin != "*" => match HeaderValue::from_str(origin) {
            Ok(value) => layer
                .allow_origin(value)
                .allow_credentials(config.allow_credentials),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                layer.allow_origin(Any)
            }
        },
        _ => layer.allow_origin(Any),
    }
}

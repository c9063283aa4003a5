//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use airdrop_relay::config::RelayConfig;
use airdrop_relay::http::HttpServer;
use airdrop_relay::lifecycle::Shutdown;
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A syntactically valid recipient address.
#[allow(dead_code)]
pub const ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

/// JSON-RPC calls seen by a mock backend, as `(method, params)`.
pub type CallLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Start a mock Solana JSON-RPC backend on an ephemeral port.
///
/// `f` receives the method and params and returns either the `result`
/// value or a `(code, message)` JSON-RPC error.
pub async fn start_mock_rpc<F>(f: F) -> (SocketAddr, CallLog)
where
    F: Fn(&str, &Value) -> Result<Value, (i64, String)> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let log = calls.clone();

    let app = Router::new().route(
        "/",
        post(move |Json(req): Json<Value>| {
            let f = f.clone();
            let log = log.clone();
            async move {
                let method = req["method"].as_str().unwrap_or_default().to_string();
                log.lock().unwrap().push((method.clone(), req["params"].clone()));

                let reply = match f(&method, &req["params"]) {
                    Ok(result) => json!({ "jsonrpc": "2.0", "id": req["id"], "result": result }),
                    Err((code, message)) => json!({
                        "jsonrpc": "2.0",
                        "id": req["id"],
                        "error": { "code": code, "message": message },
                    }),
                };
                Json(reply)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, calls)
}

/// `getSignatureStatuses` result with a single status entry.
#[allow(dead_code)]
pub fn signature_status(confirmation_status: &str, err: Value) -> Value {
    json!({
        "context": { "slot": 100 },
        "value": [{
            "slot": 99,
            "confirmations": 1,
            "err": err,
            "confirmationStatus": confirmation_status,
        }],
    })
}

/// Configuration pointing both networks at local mock backends.
#[allow(dead_code)]
pub fn relay_config(devnet: SocketAddr, testnet: SocketAddr) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.static_files.enabled = false;
    config.rpc.devnet_url = format!("http://{}", devnet);
    config.rpc.testnet_url = format!("http://{}", testnet);
    config.rpc.request_timeout_secs = 5;
    config.rpc.confirmation_timeout_secs = 5;
    config.rpc.poll_interval_ms = 10;
    config
}

/// Start the relay on an ephemeral port.
#[allow(dead_code)]
pub async fn start_relay(config: RelayConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client that never goes through a system proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

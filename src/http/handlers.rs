//! Route handlers.

use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};

use crate::airdrop::{validate, AirdropError, AirdropResult};
use crate::http::request::{AirdropBody, RequestIdExt};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /`: liveness probe.
pub async fn liveness() -> Json<Value> {
    Json(json!({ "success": "running" }))
}

/// `POST /airdrop`: validate, fund, confirm.
pub async fn airdrop(
    State(state): State<AppState>,
    headers: HeaderMap,
    AirdropBody(raw): AirdropBody,
) -> Result<Json<AirdropResult>, AirdropError> {
    let request_id = headers.request_id();

    let request = match validate(&raw) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(request_id = %request_id, reason = e.kind(), "Airdrop request rejected");
            metrics::record_airdrop(None, e.kind());
            return Err(e);
        }
    };

    tracing::info!(
        request_id = %request_id,
        network = %request.network,
        amount = request.amount.sol(),
        recipient = %request.address,
        "Airdrop requested"
    );

    match state.forwarder.forward(&request).await {
        Ok(signature) => {
            metrics::record_airdrop(Some(request.network), "success");
            let explorer_link = state.config.rpc.explorer_link(&signature, request.network);
            Ok(Json(AirdropResult::new(&request, signature, explorer_link)))
        }
        Err(e) => {
            metrics::record_airdrop(Some(request.network), e.kind());
            Err(e)
        }
    }
}

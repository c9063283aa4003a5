//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the caller sent none
//! - Decode the airdrop body from JSON or urlencoded form data
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Body size limits surface as 413 before any decoding happens
//! - A body that does not decode is treated as empty, so validation
//!   produces the usual 400 for the first missing field

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::airdrop::RawAirdropRequest;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID from headers.
pub trait RequestIdExt {
    fn request_id(&self) -> &str;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> &str {
        self.get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Body of `POST /airdrop`, accepted as JSON or urlencoded form.
#[derive(Debug, Clone)]
pub struct AirdropBody(pub RawAirdropRequest);

impl<S> FromRequest<S> for AirdropBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self(decode_body(&content_type, &bytes)))
    }
}

fn decode_body(content_type: &str, bytes: &[u8]) -> RawAirdropRequest {
    let mime = content_type.split(';').next().unwrap_or("").trim();

    if mime == "application/x-www-form-urlencoded" {
        RawAirdropRequest::from_form_pairs(url::form_urlencoded::parse(bytes))
    } else if mime == "application/json" || mime.ends_with("+json") {
        match serde_json::from_slice(bytes) {
            Ok(body) => RawAirdropRequest::from_json(body),
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable JSON body treated as empty");
                RawAirdropRequest::default()
            }
        }
    } else {
        RawAirdropRequest::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_decode_json() {
        let raw = decode_body(
            "application/json; charset=utf-8",
            br#"{"network":"devnet","amount":1.5,"address":"abc"}"#,
        );
        assert_eq!(raw.network, Some(json!("devnet")));
        assert_eq!(raw.amount, Some(json!(1.5)));
        assert_eq!(raw.address, Some(json!("abc")));
    }

    #[test]
    fn test_decode_form() {
        let raw = decode_body(
            "application/x-www-form-urlencoded",
            b"network=testnet&amount=0.25&address=9WzD%2BX",
        );
        assert_eq!(raw.network, Some(Value::String("testnet".into())));
        assert_eq!(raw.amount, Some(Value::String("0.25".into())));
        assert_eq!(raw.address, Some(Value::String("9WzD+X".into())));
    }

    #[test]
    fn test_undecodable_bodies_are_empty() {
        for (content_type, body) in [
            ("application/json", &b"{not json"[..]),
            ("application/json", &b"[1,2,3]"[..]),
            ("application/json", &br#"["devnet",1,"9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"]"#[..]),
            ("text/plain", &br#"{"amount":1}"#[..]),
            ("", &br#"{"amount":1}"#[..]),
        ] {
            let raw = decode_body(content_type, body);
            assert!(raw.amount.is_none(), "{} {:?}", content_type, body);
            assert!(raw.network.is_none() && raw.address.is_none());
        }
    }

    #[test]
    fn test_request_id_fallback() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.request_id(), "unknown");
        headers.insert(X_REQUEST_ID, HeaderValue::from_static("abc-123"));
        assert_eq!(headers.request_id(), "abc-123");
    }

    #[test]
    fn test_make_request_uuid() {
        let request = axum::http::Request::new(());
        let id = MakeRequestUuid.make_request_id(&request).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }
}

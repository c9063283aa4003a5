//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check that URLs and header values are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., `rpc.devnet_url`).
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::new("listener.host", "must not be empty"));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::new("security.max_body_size", "must be greater than 0"));
    }

    if let Some(origin) = &config.cors.allowed_origin {
        if HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::new(
                "cors.allowed_origin",
                format!("'{}' is not a valid header value", origin),
            ));
        }
    }

    if config.static_files.enabled && config.static_files.dir.trim().is_empty() {
        errors.push(ValidationError::new("static_files.dir", "must not be empty when enabled"));
    }

    check_http_url(&mut errors, "rpc.devnet_url", &config.rpc.devnet_url);
    check_http_url(&mut errors, "rpc.testnet_url", &config.rpc.testnet_url);
    check_http_url(&mut errors, "rpc.explorer_url", &config.rpc.explorer_url);

    if config.rpc.request_timeout_secs == 0 {
        errors.push(ValidationError::new("rpc.request_timeout_secs", "must be greater than 0"));
    }
    if config.rpc.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new("rpc.confirmation_timeout_secs", "must be greater than 0"));
    }
    if config.rpc.poll_interval_ms == 0 {
        errors.push(ValidationError::new("rpc.poll_interval_ms", "must be greater than 0"));
    } else if config.rpc.poll_interval_ms >= config.rpc.confirmation_timeout_secs.saturating_mul(1000) {
        errors.push(ValidationError::new(
            "rpc.poll_interval_ms",
            "must be shorter than the confirmation timeout",
        ));
    }

    match config.observability.log_format.as_str() {
        "pretty" | "json" => {}
        other => errors.push(ValidationError::new(
            "observability.log_format",
            format!("unknown format '{}', expected 'pretty' or 'json'", other),
        )),
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(field, format!("invalid URL '{}': {}", value, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = RelayConfig::default();
        config.security.max_body_size = 0;
        config.rpc.devnet_url = "not a url".to_string();
        config.rpc.testnet_url = "ftp://example.com".to_string();
        config.observability.log_format = "xml".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "security.max_body_size",
                "rpc.devnet_url",
                "rpc.testnet_url",
                "observability.log_format",
            ]
        );
    }

    #[test]
    fn test_poll_interval_must_fit_deadline() {
        let mut config = RelayConfig::default();
        config.rpc.confirmation_timeout_secs = 1;
        config.rpc.poll_interval_ms = 1000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "rpc.poll_interval_ms");
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = RelayConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_cors_origin_must_be_header_value() {
        let mut config = RelayConfig::default();
        config.cors.allowed_origin = Some("http://bad\norigin".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "cors.allowed_origin");
    }
}

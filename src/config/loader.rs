//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env {
        var: &'static str,
        value: String,
        reason: String,
    },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, value, reason } => {
                write!(f, "Invalid {}='{}': {}", var, value, reason)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse configuration from a TOML file without validating it.
pub fn read_config_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load the process configuration.
///
/// Starts from the TOML file when one is given (defaults otherwise), applies
/// environment overrides, then validates the result.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => RelayConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(port) = get("PORT") {
        config.listener.port = port.trim().parse::<u16>().map_err(|e| {
            ConfigError::Env {
                var: "PORT",
                value: port.clone(),
                reason: e.to_string(),
            }
        })?;
    }

    if let Some(origin) = get("CORS_ORIGIN") {
        config.cors.allowed_origin = Some(origin);
    }

    if let Some(url) = get("DEVNET_RPC_URL") {
        config.rpc.devnet_url = url;
    }

    if let Some(url) = get("TESTNET_RPC_URL") {
        config.rpc.testnet_url = url;
    }

    if let Some(format) = get("LOG_FORMAT") {
        config.observability.log_format = format;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RelayConfig::default();
        apply_env_overrides(
            &mut config,
            lookup(&[
                ("PORT", "4000"),
                ("CORS_ORIGIN", "https://faucet.example"),
                ("DEVNET_RPC_URL", "http://127.0.0.1:8899"),
            ]),
        )
        .unwrap();

        assert_eq!(config.listener.port, 4000);
        assert_eq!(config.cors.allowed_origin.as_deref(), Some("https://faucet.example"));
        assert_eq!(config.rpc.devnet_url, "http://127.0.0.1:8899");
        assert_eq!(config.rpc.testnet_url, "https://api.testnet.solana.com");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = RelayConfig::default();
        apply_env_overrides(&mut config, lookup(&[("PORT", ""), ("CORS_ORIGIN", "  ")])).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert!(config.cors.allowed_origin.is_none());
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let mut config = RelayConfig::default();
        let err = apply_env_overrides(&mut config, lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PORT", .. }));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_read_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[rpc]\ndevnet_url = \"http://localhost:8899\"\n\n[security]\nmax_body_size = 1024"
        )
        .unwrap();

        let config = read_config_file(file.path()).unwrap();
        assert_eq!(config.rpc.devnet_url, "http://localhost:8899");
        assert_eq!(config.security.max_body_size, 1024);
    }

    #[test]
    fn test_read_config_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener\nport = ").unwrap();
        assert!(matches!(read_config_file(file.path()), Err(ConfigError::Parse(_))));
    }
}

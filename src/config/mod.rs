mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`), falling
/// back to built-in defaults when no file exists. `CAMPUS_GATEWAY_URL` and
/// `CAMPUS_AI_URL` override the two service origins.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let raw = match tokio::fs::read_to_string(&config_path).await {
        Ok(raw) => {
            debug!("Loading configuration from: {}", config_path);
            Some(raw)
        }
        Err(_) => {
            debug!("No configuration file at {}, using defaults", config_path);
            None
        }
    };

    build(
        raw.as_deref(),
        env::var("CAMPUS_GATEWAY_URL").ok(),
        env::var("CAMPUS_AI_URL").ok(),
    )
}

fn build(
    raw: Option<&str>,
    gateway_override: Option<String>,
    ai_override: Option<String>,
) -> Result<Config> {
    let mut config: Config = match raw {
        Some(raw) => serde_yaml::from_str(raw)?,
        None => Config::default(),
    };

    if let Some(url) = gateway_override {
        config.gateway.base_url = url;
    }
    if let Some(url) = ai_override {
        config.ai.base_url = url;
    }

    config.gateway.base_url = config.gateway.base_url.trim_end_matches('/').to_string();
    config.ai.base_url = config.ai.base_url.trim_end_matches('/').to_string();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_when_no_file() {
        let config = build(None, None, None).unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:8090/api/gateway");
        assert_eq!(config.gateway.timeout_secs, 15);
        assert_eq!(config.ai.base_url, "http://localhost:8003/api/ai");
        assert_eq!(config.logs.level, "info");
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = "gateway:\n  base_url: http://gateway.campus.internal/api/gateway\n";
        let config = build(Some(yaml), None, None).unwrap();
        assert_eq!(
            config.gateway.base_url,
            "http://gateway.campus.internal/api/gateway"
        );
        assert_eq!(config.gateway.timeout_secs, 15);
        assert_eq!(config.ai.base_url, "http://localhost:8003/api/ai");
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let yaml = "gateway:\n  base_url: http://from-file:8090/api/gateway\n";
        let config = build(
            Some(yaml),
            Some("http://from-env:9000/api/gateway".to_string()),
            Some("http://from-env:9003/api/ai".to_string()),
        )
        .unwrap();
        assert_eq!(config.gateway.base_url, "http://from-env:9000/api/gateway");
        assert_eq!(config.ai.base_url, "http://from-env:9003/api/ai");
    }

    #[test]
    fn test_trailing_slashes_are_normalized() {
        let config = build(
            None,
            Some("http://localhost:8090/api/gateway/".to_string()),
            Some("http://localhost:8003/api/ai/".to_string()),
        )
        .unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:8090/api/gateway");
        assert_eq!(config.ai.base_url, "http://localhost:8003/api/ai");
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let result = build(Some("gateway: ["), None, None);
        assert!(result.is_err());
    }
}

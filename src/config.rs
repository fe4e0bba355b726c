use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid backend endpoint {value:?}: {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

/// Settings injected into every handler through the router state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API
    pub endpoint: Url,
}

impl Config {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            value: endpoint.to_string(),
            reason,
        };

        let url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme `{other}`"))),
        }
        if url.cannot_be_a_base() {
            return Err(invalid(String::from("not a base URL")));
        }

        Ok(Self { endpoint: url })
    }

    /// Use the override when one is given, otherwise the local development backend
    pub fn resolve(endpoint: Option<&str>) -> Result<Self, ConfigError> {
        match endpoint {
            Some(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_ENDPOINT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = Config::resolve(None).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8000/");

        let blank = Config::resolve(Some("  ")).unwrap();
        assert_eq!(blank.endpoint, config.endpoint);
    }

    #[test]
    fn explicit_endpoint_overrides_default() {
        let config = Config::resolve(Some("https://api.example.com/backend")).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("api.example.com"));
        assert_eq!(config.endpoint.path(), "/backend");
    }

    #[test]
    fn rejects_relative_endpoint() {
        let err = Config::new("localhost-without-scheme").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = Config::new("ftp://files.example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme `ftp`"));
    }
}

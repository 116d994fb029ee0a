use crate::{env_required, ConfigError, FromEnv};
use std::env;

/// CORS allowlist configuration.
///
/// The frontend origin is mandatory; a backend origin can be added for
/// server-to-server browsers sitting behind the API.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }
}

impl FromEnv for CorsConfig {
    /// Reads from environment variables:
    /// - FRONTEND_URL (required) - the origin allowed to call the API
    /// - BACKEND_URL (optional) - an additional allowed origin
    fn from_env() -> Result<Self, ConfigError> {
        let mut allowed_origins = vec![env_required("FRONTEND_URL")?];

        if let Ok(backend) = env::var("BACKEND_URL") {
            if !backend.is_empty() {
                allowed_origins.push(backend);
            }
        }

        Ok(Self { allowed_origins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_requires_frontend_url() {
        temp_env::with_vars(
            [("FRONTEND_URL", None::<&str>), ("BACKEND_URL", None)],
            || {
                let result = CorsConfig::from_env();
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("FRONTEND_URL"));
            },
        );
    }

    #[test]
    fn test_cors_config_frontend_only() {
        temp_env::with_vars(
            [
                ("FRONTEND_URL", Some("http://localhost:5173")),
                ("BACKEND_URL", None),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
            },
        );
    }

    #[test]
    fn test_cors_config_with_backend() {
        temp_env::with_vars(
            [
                ("FRONTEND_URL", Some("http://localhost:5173")),
                ("BACKEND_URL", Some("http://localhost:8080")),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://localhost:5173", "http://localhost:8080"]
                );
            },
        );
    }
}

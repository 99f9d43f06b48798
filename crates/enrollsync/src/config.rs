use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream school API (required)
    pub upstream_base_url: String,
    /// API key sent with every upstream request (required)
    pub upstream_api_key: String,
    /// Timeout for a single upstream request in seconds (default: 30)
    pub upstream_timeout_seconds: u64,
    /// Timeout for a whole inbound request in seconds (default: 30)
    pub request_timeout_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TEACHABLE_API_BASE_URL` - Upstream API base URL (required)
    /// - `TEACHABLE_API_KEY` - Upstream API key (required)
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream request timeout (default: 30)
    /// - `REQUEST_TIMEOUT_SECONDS` - Inbound request timeout (default: 30)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            upstream_base_url: required("TEACHABLE_API_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            upstream_api_key: required("TEACHABLE_API_KEY")?,
            upstream_timeout_seconds: parse_seconds(&lookup, "UPSTREAM_TIMEOUT_SECONDS", 30)?,
            request_timeout_seconds: parse_seconds(&lookup, "REQUEST_TIMEOUT_SECONDS", 30)?,
            cache_max_entries: parse_or(&lookup, "CACHE_MAX_ENTRIES", 10_000)?,
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
        })
    }

    /// Get the upstream request timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    /// Get the inbound request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        None => Ok(default),
    }
}

/// Parses a timeout in seconds. Zero is rejected since it would expire
/// every call immediately.
fn parse_seconds<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, name, default)? {
        0 => Err(ConfigError::InvalidVar {
            name,
            value: "0".to_string(),
        }),
        seconds => Ok(seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEACHABLE_API_BASE_URL", "https://api.example.com"),
            ("TEACHABLE_API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.upstream_base_url, "https://api.example.com");
        assert_eq!(config.upstream_api_key, "secret");
        assert_eq!(config.upstream_timeout_seconds, 30);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.redis_url, "redis://localhost:6379");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEACHABLE_API_BASE_URL", "https://api.example.com/"),
            ("TEACHABLE_API_KEY", "secret"),
            ("UPSTREAM_TIMEOUT_SECONDS", "5"),
            ("REQUEST_TIMEOUT_SECONDS", "60"),
            ("CACHE_MAX_ENTRIES", "50"),
            ("REDIS_URL", "redis://cache:6380"),
        ]))
        .unwrap();

        assert_eq!(config.upstream_base_url, "https://api.example.com");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.cache_max_entries, 50);
        assert_eq!(config.redis_url, "redis://cache:6380");
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::from_lookup(lookup_from(&[(
            "TEACHABLE_API_BASE_URL",
            "https://api.example.com",
        )]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar("TEACHABLE_API_KEY")
        );
    }

    #[test]
    fn test_blank_base_url_is_missing() {
        let result = Config::from_lookup(lookup_from(&[
            ("TEACHABLE_API_BASE_URL", "  "),
            ("TEACHABLE_API_KEY", "secret"),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar("TEACHABLE_API_BASE_URL")
        );
    }

    #[test]
    fn test_invalid_number() {
        let result = Config::from_lookup(lookup_from(&[
            ("TEACHABLE_API_BASE_URL", "https://api.example.com"),
            ("TEACHABLE_API_KEY", "secret"),
            ("CACHE_MAX_ENTRIES", "lots"),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidVar {
                name: "CACHE_MAX_ENTRIES",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_zero_timeouts_are_rejected() {
        for name in ["UPSTREAM_TIMEOUT_SECONDS", "REQUEST_TIMEOUT_SECONDS"] {
            let result = Config::from_lookup(lookup_from(&[
                ("TEACHABLE_API_BASE_URL", "https://api.example.com"),
                ("TEACHABLE_API_KEY", "secret"),
                (name, "0"),
            ]));

            assert_eq!(
                result.unwrap_err(),
                ConfigError::InvalidVar {
                    name,
                    value: "0".to_string()
                }
            );
        }
    }
}

//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own options (site address, asset paths) still come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

use std::str::FromStr;

/// Default `Cache-Control` max-age for `/pkg` assets: one day.
pub const DEFAULT_STATIC_MAX_AGE: u64 = 86_400;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable brotli/gzip response compression (`COMPRESSION`)
    pub compression: bool,

    /// `Cache-Control` max-age in seconds for static assets (`STATIC_MAX_AGE`)
    pub static_max_age: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables take their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_bool("COMPRESSION", &value)?,
            None => true,
        };

        let static_max_age = match lookup("STATIC_MAX_AGE") {
            Some(value) => {
                u64::from_str(value.trim()).map_err(|_| ConfigError::InvalidNumber {
                    name: "STATIC_MAX_AGE",
                    value,
                })?
            }
            None => DEFAULT_STATIC_MAX_AGE,
        };

        Ok(Self {
            compression,
            static_max_age,
        })
    }

    /// `Cache-Control` header value for static assets
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.static_max_age)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            static_max_age: DEFAULT_STATIC_MAX_AGE,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert_eq!(config.static_max_age, 86_400);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("COMPRESSION", "off"),
            ("STATIC_MAX_AGE", " 600 "),
        ]))
        .unwrap();
        assert!(!config.compression);
        assert_eq!(config.static_max_age, 600);
    }

    #[test]
    fn test_bool_is_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[("COMPRESSION", "TRUE")])).unwrap();
        assert!(config.compression);
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup_from(&[("COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("COMPRESSION"));
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup_from(&[("STATIC_MAX_AGE", "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { name: "STATIC_MAX_AGE", .. }));
    }

    #[test]
    fn test_cache_control_header() {
        let config = Config {
            compression: true,
            static_max_age: 3600,
        };
        assert_eq!(config.cache_control(), "public, max-age=3600");
    }
}

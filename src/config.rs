//! Runtime configuration
//!
//! Read once at startup from environment variables.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::models::DEFAULT_HISTORY_CAPACITY;

/// Environment variable overriding the history capacity
pub const HISTORY_CAPACITY_VAR: &str = "UNITCONV_HISTORY_CAPACITY";
/// Environment variable overriding the default log directive
pub const LOG_VAR: &str = "UNITCONV_LOG";
/// Standard tracing filter variable; takes precedence over `UNITCONV_LOG`
pub const RUST_LOG_VAR: &str = "RUST_LOG";
/// Log directive used when neither `RUST_LOG` nor `UNITCONV_LOG` is set
pub const DEFAULT_LOG_DIRECTIVE: &str = "unitconv=info";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCapacity { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub history_capacity: usize,
    pub log_directive: String,
    /// Raw `RUST_LOG` value, if set
    pub rust_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            rust_log: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(HISTORY_CAPACITY_VAR) {
            config.history_capacity = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: HISTORY_CAPACITY_VAR,
                        value: raw,
                    })
                }
            };
        }

        if let Some(directive) = lookup(LOG_VAR) {
            if !directive.trim().is_empty() {
                config.log_directive = directive.trim().to_string();
            }
        }

        config.rust_log = lookup(RUST_LOG_VAR).filter(|v| !v.trim().is_empty());

        Ok(config)
    }

    /// Tracing filter: `RUST_LOG` verbatim when set, otherwise the
    /// configured directive
    pub fn env_filter(&self) -> EnvFilter {
        match &self.rust_log {
            Some(rust_log) => EnvFilter::new(rust_log),
            None => EnvFilter::new(&self.log_directive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_subscriber::filter::LevelFilter;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (HISTORY_CAPACITY_VAR, " 25 "),
            (LOG_VAR, "unitconv=debug"),
        ]))
        .unwrap();
        assert_eq!(config.history_capacity, 25);
        assert_eq!(config.log_directive, "unitconv=debug");
    }

    #[test]
    fn test_filter_defaults_to_info() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_overrides_default_directive() {
        let config = Config::from_lookup(lookup(&[(RUST_LOG_VAR, "unitconv=debug")])).unwrap();
        let filter = config.env_filter();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_wins_over_unitconv_log() {
        let config = Config::from_lookup(lookup(&[
            (RUST_LOG_VAR, "unitconv=trace"),
            (LOG_VAR, "unitconv=warn"),
        ]))
        .unwrap();
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_unitconv_log_used_without_rust_log() {
        let config = Config::from_lookup(lookup(&[(LOG_VAR, "unitconv=debug"), (RUST_LOG_VAR, " ")])).unwrap();
        assert_eq!(config.rust_log, None);
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_capacity() {
        for bad in ["0", "-3", "ten"] {
            assert!(Config::from_lookup(lookup(&[(HISTORY_CAPACITY_VAR, bad)])).is_err());
        }
    }
}

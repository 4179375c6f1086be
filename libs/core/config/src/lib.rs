pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `APP_ENV=production` (any case) selects production; anything else is development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Name and version reported by `/health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's `Cargo.toml`.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Non-empty value of `key`, if any.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse `key` into `T`, falling back to `default` when unset.
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_uses_crate_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("CORE_CONFIG_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("CORE_CONFIG_TEST_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("CORE_CONFIG_TEST_VAR", || {
            assert_eq!(env_or_default("CORE_CONFIG_TEST_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("CORE_CONFIG_REQUIRED", || {
            let err = env_required("CORE_CONFIG_REQUIRED").unwrap_err();
            assert_eq!(err, ConfigError::MissingEnvVar("CORE_CONFIG_REQUIRED".to_string()));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_optional_ignores_blank() {
        temp_env::with_var("CORE_CONFIG_OPTIONAL", Some("  "), || {
            assert_eq!(env_optional("CORE_CONFIG_OPTIONAL"), None);
        });
        temp_env::with_var("CORE_CONFIG_OPTIONAL", Some("postgres://db"), || {
            assert_eq!(env_optional("CORE_CONFIG_OPTIONAL").as_deref(), Some("postgres://db"));
        });
    }

    #[test]
    fn test_env_parse() {
        temp_env::with_var_unset("CORE_CONFIG_NUMBER", || {
            assert_eq!(env_parse("CORE_CONFIG_NUMBER", 7u32), Ok(7));
        });
        temp_env::with_var("CORE_CONFIG_NUMBER", Some(" 42 "), || {
            assert_eq!(env_parse("CORE_CONFIG_NUMBER", 7u32), Ok(42));
        });
        temp_env::with_var("CORE_CONFIG_NUMBER", Some("forty"), || {
            let err = env_parse("CORE_CONFIG_NUMBER", 7u32).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "CORE_CONFIG_NUMBER"));
        });
    }
}

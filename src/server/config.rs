//! Application configuration loaded from the environment.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Default lifetime of a password-reset verification code.
pub const DEFAULT_VERIFICATION_CODE_TTL_MINUTES: i64 = 10;

/// Server configuration.
///
/// Loaded once at startup and handed to the components that need it; nothing
/// reads the environment after [`Config::from_env`] returns.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection URL of the relational store
    pub database_url: String,
    /// Bearer token granting access to the admin API
    pub admin_api_key: String,
    /// Socket address the HTTP server listens on
    pub bind_address: SocketAddr,
    /// Minutes a password-reset code remains valid
    pub verification_code_ttl_minutes: i64,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `ADMIN_API_KEY` unset
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let database_url = required("DATABASE_URL")?;
        let admin_api_key = required("ADMIN_API_KEY")?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let verification_code_ttl_minutes = match lookup("VERIFICATION_CODE_TTL_MINUTES") {
            None => DEFAULT_VERIFICATION_CODE_TTL_MINUTES,
            Some(value) => match value.parse::<i64>() {
                Ok(minutes) if minutes > 0 => minutes,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "VERIFICATION_CODE_TTL_MINUTES".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "VERIFICATION_CODE_TTL_MINUTES".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            admin_api_key,
            bind_address,
            verification_code_ttl_minutes,
        })
    }
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

/// Signing secret and token lifetime for the auth core. Kept as a plain
/// cloneable value (rather than only a global) so tests can inject fixed
/// secrets and short expiries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub token_expiry_secs: u64,
}

impl SecurityConfig {
    /// Startup-time check. An unusable signing secret must stop the process
    /// before it can issue unverifiable tokens.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.jwt_secret.is_empty(),
            "JWT_SECRET must be set to a non-empty value"
        );
        anyhow::ensure!(
            self.token_expiry_secs > 0,
            "TOKEN_EXPIRY_SECS must be greater than zero"
        );
        Ok(())
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Environment presets first, specific env vars override.
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("TOKEN_EXPIRY_SECS") {
            self.security.token_expiry_secs = v.parse().unwrap_or(self.security.token_expiry_secs);
        }
        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 30,
            },
            security: SecurityConfig {
                jwt_secret: "dev-secret-change-me".to_string(),
                token_expiry_secs: 60 * 60, // 1 hour
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
            },
            security: SecurityConfig {
                // No fallback outside development; must come from JWT_SECRET.
                jwt_secret: String::new(),
                token_expiry_secs: 60 * 60,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                token_expiry_secs: 15 * 60,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_has_a_usable_secret() {
        let config = AppConfig::development();
        assert!(config.security.validate().is_ok());
    }

    #[test]
    fn production_refuses_to_run_without_a_secret() {
        let config = AppConfig::production();
        assert!(config.security.validate().is_err());
    }

    #[test]
    fn empty_expiry_is_rejected() {
        let security = SecurityConfig {
            jwt_secret: "secret".to_string(),
            token_expiry_secs: 0,
        };
        assert!(security.validate().is_err());
    }
}

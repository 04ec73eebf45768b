//! Configuration types.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::onboarding::model::settings_keys;

/// Server configuration, read from `YOYO_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Path of the libSQL database file.
    pub db_path: PathBuf,
    /// Settings owner for the persisted onboarding state (single-user deployment).
    pub user_id: String,
    /// Upper bound on a hydration read before the default state is trusted.
    pub hydrate_timeout: Duration,
    /// How long the gate handler waits for a decision before rendering the loading page.
    pub gate_render_budget: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            db_path: PathBuf::from("./data/yoyo-academy.db"),
            user_id: settings_keys::DEFAULT_USER.to_string(),
            hydrate_timeout: Duration::from_millis(3000),
            gate_render_budget: Duration::from_millis(250),
        }
    }
}

impl AppConfig {
    /// Build the config from the environment, falling back to defaults for
    /// unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = std::env::var("YOYO_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let db_path = std::env::var("YOYO_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let user_id = std::env::var("YOYO_USER_ID")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.user_id);

        let hydrate_timeout = std::env::var("YOYO_HYDRATE_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.hydrate_timeout);

        let gate_render_budget = std::env::var("YOYO_GATE_RENDER_BUDGET_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.gate_render_budget);

        Self {
            bind_addr,
            db_path,
            user_id,
            hydrate_timeout,
            gate_render_budget,
        }
    }

    /// Reject values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                key: "YOYO_BIND_ADDR".to_string(),
                message: format!("{:?} is not a socket address", self.bind_addr),
            });
        }
        if self.hydrate_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "YOYO_HYDRATE_TIMEOUT_MS".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.user_id, "default");
        assert_eq!(config.hydrate_timeout, Duration::from_secs(3));
        assert_eq!(config.gate_render_budget, Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = AppConfig {
            bind_addr: "localhost".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { key, .. }) if key == "YOYO_BIND_ADDR"
        ));

        let config = AppConfig {
            hydrate_timeout: Duration::ZERO,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

// ============================================================================
// CONFIG - Compile-time application configuration
// ============================================================================

use serde::{Deserialize, Serialize};

/// How logins and signups are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Built-in demo accounts only; signups never leave the browser
    Demo,
    /// Demo accounts first, then the backend `/auth/*` endpoints
    Remote,
}

impl AuthMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" | "api" | "backend" => AuthMode::Remote,
            _ => AuthMode::Demo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub auth_mode: AuthMode,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub user_key: String,
    pub token_key: String,
    pub settings_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user_key: "user".to_string(),
            token_key: "token".to_string(),
            settings_key: "settings".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:5000/api".to_string(),
            environment: "development".to_string(),
            auth_mode: AuthMode::Demo,
            enable_logging: true,
            toast_duration_ms: 3000,
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("AUTH_MODE"),
            option_env!("ENABLE_LOGGING"),
            option_env!("TOAST_DURATION_MS"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        auth_mode: Option<&str>,
        enable_logging: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            auth_mode: auth_mode.map(AuthMode::parse).unwrap_or(defaults.auth_mode),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.toast_duration_ms),
            storage: StorageConfig::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config.backend_url, "http://localhost:5000/api");
        assert_eq!(config.auth_mode, AuthMode::Demo);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.storage.user_key, "user");
        assert!(!config.is_production());
    }

    #[test]
    fn values_override_defaults() {
        let config = AppConfig::from_values(
            Some("https://api.agriconnect.example/api/"),
            Some("production"),
            Some("Remote"),
            Some("false"),
            Some("5000"),
        );
        assert_eq!(config.backend_url, "https://api.agriconnect.example/api");
        assert_eq!(config.auth_mode, AuthMode::Remote);
        assert!(!config.is_logging_enabled());
        assert_eq!(config.toast_duration_ms, 5000);
        assert!(config.is_production());
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = AppConfig::from_values(None, None, Some("???"), Some("maybe"), Some("0"));
        assert_eq!(config.auth_mode, AuthMode::Demo);
        assert!(config.enable_logging);
        assert_eq!(config.toast_duration_ms, 3000);
    }
}

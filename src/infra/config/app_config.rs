use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub service: ServiceConfig,
    pub startup: StartupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// The answer service boundary. `base_url` is the one functional knob;
/// the rest shapes the HTTP client and the validation policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub require_username: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            request_timeout_ms: 10_000,
            require_username: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartupConfig {
    pub health_probe_delay_ms: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            health_probe_delay_ms: 1_000,
        }
    }
}

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, ServiceConfig, StartupConfig};

/// On-disk shape of the config file: every field optional, merged over the
/// built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub service: Option<FileServiceConfig>,
    pub startup: Option<FileStartupConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(service) = self.service {
            service.merge_into(&mut config.service);
        }

        if let Some(startup) = self.startup {
            startup.merge_into(&mut config.startup);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileServiceConfig {
    pub base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub require_username: Option<bool>,
}

impl FileServiceConfig {
    fn merge_into(self, config: &mut ServiceConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }

        if let Some(require_username) = self.require_username {
            config.require_username = require_username;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStartupConfig {
    pub health_probe_delay_ms: Option<u64>,
}

impl FileStartupConfig {
    fn merge_into(self, config: &mut StartupConfig) {
        if let Some(delay_ms) = self.health_probe_delay_ms {
            config.health_probe_delay_ms = delay_ms;
        }
    }
}

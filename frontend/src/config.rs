use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::*;

static CONFIG: OnceLock<FrontendConfig> = OnceLock::new();

const BUNDLED_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    /// Origin of the judge API, e.g. `http://localhost:12345`
    #[serde(default = "default_api_server")]
    pub api_server: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// How often a pending submission is polled
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_api_server() -> String {
    "http://localhost:12345".to_owned()
}

fn default_site_name() -> String {
    "Rust Course Online Judge".to_owned()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_server: default_api_server(),
            site_name: default_site_name(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl FrontendConfig {
    pub fn from_toml(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw).context("parse config")?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        let trimmed = self.api_server.trim_end_matches('/').len();
        self.api_server.truncate(trimmed);
    }

    fn with_api_server(mut self, api_server: Option<&str>) -> Self {
        if let Some(api_server) = api_server {
            self.api_server = api_server.to_owned();
            self.normalize();
        }
        self
    }
}

fn load_config() -> FrontendConfig {
    let config = FrontendConfig::from_toml(BUNDLED_CONFIG).unwrap_or_else(|err| {
        tracing::error!(%err, "bundled config is malformed, using defaults");
        FrontendConfig::default()
    });
    config.with_api_server(option_env!("OJ_API_SERVER"))
}

/// The process-wide frontend config, resolved on first use.
pub fn frontend_config() -> &'static FrontendConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_fall_back() {
        let config = FrontendConfig::from_toml("site_name = \"OJ\"").unwrap();
        assert_eq!(config.api_server, "http://localhost:12345");
        assert_eq!(config.site_name, "OJ");
        assert_eq!(config.poll_interval_ms, 1000);
    }

    #[test]
    fn trailing_slash_trimmed() {
        let config =
            FrontendConfig::from_toml("api_server = \"http://judge:8080//\"")
                .unwrap();
        assert_eq!(config.api_server, "http://judge:8080");
        let config = FrontendConfig::default()
            .with_api_server(Some("https://oj.example.com/"));
        assert_eq!(config.api_server, "https://oj.example.com");
    }

    #[test]
    fn malformed_config() {
        let err = FrontendConfig::from_toml("poll_interval_ms = \"soon\"")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[test]
    fn bundled_config_parses() {
        let config = FrontendConfig::from_toml(BUNDLED_CONFIG).unwrap();
        assert_eq!(config, FrontendConfig::default());
    }
}

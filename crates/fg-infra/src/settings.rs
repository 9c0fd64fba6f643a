//! Gateway settings.
//!
//! Pure data loading: a TOML file plus `FACEGATE_`-prefixed environment
//! overrides, with defaults applied by the builder. No validation happens
//! here; the backend is the authority on whether the URL actually serves.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewaySettings {
    /// Registration backend origin, without a trailing slash.
    pub base_url: String,
    /// Client-side timeout applied to every request.
    pub timeout_secs: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewaySettings {
    /// Load settings from an optional TOML file, then the environment
    /// (`FACEGATE_BASE_URL`, `FACEGATE_TIMEOUT_SECS`), then defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("FACEGATE"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

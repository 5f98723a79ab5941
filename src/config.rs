//! src/config.rs
//!
//! Runtime settings. The backend base URL is injected through the
//! environment (`RIFT_SCATTER_API_URL`) and falls back to a build-time
//! default when absent.

use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api_url: String,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("api_url", DEFAULT_API_URL)?
        .add_source(config::Environment::with_prefix("RIFT_SCATTER"))
        .build()?;

    settings.try_deserialize()
}

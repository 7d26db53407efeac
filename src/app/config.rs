//! Client configuration. Base URLs are baked in at build time from
//! `DJEVENTS_PROXY_URL` and `DJEVENTS_API_URL` and may be overridden at runtime
//! through the same variables. Values are public; no secrets belong here.

use std::env::var;

pub const DEFAULT_PROXY_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_URL: &str = "http://localhost:1337";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the auth proxy (`/api/login`, `/api/register`, `/api/user`).
    pub proxy_base_url: String,
    /// Base URL of the upstream events API.
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads build-time values and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self {
            proxy_base_url: option_env!("DJEVENTS_PROXY_URL")
                .unwrap_or(DEFAULT_PROXY_URL)
                .to_string(),
            api_base_url: option_env!("DJEVENTS_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
        };

        apply_runtime_overrides(&mut config, runtime_config());

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    proxy_base_url: Option<String>,
    api_base_url: Option<String>,
}

fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        proxy_base_url: var("DJEVENTS_PROXY_URL")
            .ok()
            .and_then(|value| normalize_runtime_value(&value)),
        api_base_url: var("DJEVENTS_API_URL")
            .ok()
            .and_then(|value| normalize_runtime_value(&value)),
    }
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.proxy_base_url {
        config.proxy_base_url = value;
    }
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

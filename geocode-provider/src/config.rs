//! Transport configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::factory::provider_for;
use crate::types::ProviderId;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 默认最大重试次数
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Settings for [`GeocodeClient`](crate::GeocodeClient).
///
/// API keys are never serialized; they are read from the environment by
/// [`ClientConfig::from_env`] or set in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Per-provider base URL overrides (e.g. a self-hosted Nominatim).
    pub endpoints: BTreeMap<ProviderId, String>,
    /// Per-provider API keys.
    #[serde(skip)]
    pub api_keys: BTreeMap<ProviderId, String>,
    /// Retries for transient failures (0 disables retrying).
    pub max_retries: u32,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// `User-Agent` header (Nominatim's usage policy requires an identifying one).
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: BTreeMap::new(),
            api_keys: BTreeMap::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Default settings with API keys taken from each provider's environment variable.
    pub fn from_env() -> Self {
        Self::default().with_env_keys()
    }

    /// Fills in API keys from the environment, keeping keys already set.
    #[must_use]
    pub fn with_env_keys(mut self) -> Self {
        for id in ProviderId::ALL {
            let Some(var) = provider_for(id).metadata().api_key_env else {
                continue;
            };
            if self.api_keys.contains_key(&id) {
                continue;
            }
            match std::env::var(var) {
                Ok(key) if !key.trim().is_empty() => {
                    self.api_keys.insert(id, key.trim().to_string());
                }
                _ => log::debug!("[{id}] {var} not set"),
            }
        }
        self
    }

    /// Overrides a provider's base URL.
    #[must_use]
    pub fn with_endpoint(mut self, provider: ProviderId, base_url: impl Into<String>) -> Self {
        self.endpoints.insert(provider, base_url.into());
        self
    }

    /// Sets a provider's API key.
    #[must_use]
    pub fn with_api_key(mut self, provider: ProviderId, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider, key.into());
        self
    }

    /// Base URL in effect for a provider.
    pub fn base_url(&self, provider: ProviderId) -> &str {
        self.endpoints
            .get(&provider)
            .map_or(provider_for(provider).metadata().default_base_url, String::as_str)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

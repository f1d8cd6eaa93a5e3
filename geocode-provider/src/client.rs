//! Geocoding HTTP client.

use serde_json::Value;
use url::Url;

use crate::adapter::list_candidates;
use crate::config::ClientConfig;
use crate::error::{GeocodeError, Result};
use crate::factory::provider_for;
use crate::http_client::HttpUtils;
use crate::providers::common::normalize_base_url;
use crate::types::{GeocodeOutcome, ProviderId};
use crate::utils::log_sanitizer::redact_query_param;

/// Sends geocoding requests to any [`ProviderId`] and hands back raw payloads or
/// normalized outcomes.
///
/// The client is cheap to clone; clones share one connection pool.
///
/// ```rust,no_run
/// use geocode_provider::{ClientConfig, GeocodeClient, ProviderId};
///
/// # async fn run() -> geocode_provider::Result<()> {
/// let client = GeocodeClient::new(ClientConfig::from_env())?;
/// let outcome = client.geocode(ProviderId::Nominatim, "Curitiba, PR").await?;
/// for candidate in &outcome.candidates {
///     println!("{} {:?}", candidate.label, candidate.coordinate);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GeocodeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodeError::InvalidRequest {
                provider: "http".to_string(),
                detail: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Final request URL: address escaped for where the provider expects it (query
    /// parameter or path segment), API key appended when the provider needs one.
    pub fn request_url(&self, provider: ProviderId, address: &str) -> Result<Url> {
        let adapter = provider_for(provider);
        let base_url = normalize_base_url(self.config.base_url(provider));
        let mut url = adapter
            .request_url(base_url, address)
            .map_err(|e| GeocodeError::InvalidRequest {
                provider: provider.to_string(),
                detail: format!("Invalid endpoint '{base_url}': {e}"),
            })?;

        let metadata = adapter.metadata();
        if let Some(param) = metadata.api_key_param {
            match self.config.api_keys.get(&provider) {
                Some(key) => {
                    url.query_pairs_mut().append_pair(param, key);
                }
                None => log::warn!(
                    "[{provider}] No API key configured ({}), request will likely be rejected",
                    metadata.api_key_env.unwrap_or(param)
                ),
            }
        }
        Ok(url)
    }

    /// Fetches the raw provider payload.
    ///
    /// Error statuses embedded in a successful body are surfaced as [`GeocodeError::ApiError`].
    pub async fn search(&self, provider: ProviderId, address: &str) -> Result<Value> {
        let url = self.request_url(provider, address)?;
        let url_for_log = match provider_for(provider).metadata().api_key_param {
            Some(param) => redact_query_param(url.as_str(), param),
            None => url.to_string(),
        };
        let provider_name = provider.as_str();

        let body = HttpUtils::execute_request_with_retry(
            self.http.get(url),
            provider_name,
            &url_for_log,
            self.config.max_retries,
        )
        .await?;

        let raw: Value = HttpUtils::parse_json(&body, provider_name)?;
        provider_for(provider).check_response(&raw)?;
        Ok(raw)
    }

    /// Fetches and normalizes in one step.
    pub async fn geocode(&self, provider: ProviderId, address: &str) -> Result<GeocodeOutcome> {
        let raw = self.search(provider, address).await?;
        let candidates = list_candidates(&raw, provider);
        log::info!("[{provider}] {} candidate(s)", candidates.len());
        Ok(GeocodeOutcome {
            provider,
            raw,
            candidates,
        })
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GeocodeError;

// ============ Provider Types ============

/// Identifies which geocoding backend a request and its response belong to.
///
/// The set is closed: every operation dispatches on this enum, so adding a
/// backend means adding one variant and one adapter module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Google Geocoding API.
    Google,
    /// Nominatim (OpenStreetMap), usually self-hosted.
    Nominatim,
    /// Geoapify Geocoding API (GeoJSON).
    Geoapify,
    /// MapTiler Geocoding API (GeoJSON).
    Maptiler,
}

impl ProviderId {
    /// All providers, in display order.
    pub const ALL: [ProviderId; 4] = [
        ProviderId::Google,
        ProviderId::Nominatim,
        ProviderId::Geoapify,
        ProviderId::Maptiler,
    ];

    /// Lowercase identifier used on the wire and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Google => "google",
            ProviderId::Nominatim => "nominatim",
            ProviderId::Geoapify => "geoapify",
            ProviderId::Maptiler => "maptiler",
        }
    }

    /// 获取下一个 Provider（用于循环切换）
    #[must_use]
    pub fn next(self) -> ProviderId {
        match self {
            ProviderId::Google => ProviderId::Nominatim,
            ProviderId::Nominatim => ProviderId::Geoapify,
            ProviderId::Geoapify => ProviderId::Maptiler,
            ProviderId::Maptiler => ProviderId::Google,
        }
    }

    /// 获取上一个 Provider（用于循环切换）
    #[must_use]
    pub fn prev(self) -> ProviderId {
        match self {
            ProviderId::Google => ProviderId::Maptiler,
            ProviderId::Nominatim => ProviderId::Google,
            ProviderId::Geoapify => ProviderId::Nominatim,
            ProviderId::Maptiler => ProviderId::Geoapify,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = GeocodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(ProviderId::Google),
            "nominatim" => Ok(ProviderId::Nominatim),
            "geoapify" => Ok(ProviderId::Geoapify),
            "maptiler" => Ok(ProviderId::Maptiler),
            other => Err(GeocodeError::UnsupportedProvider {
                provider: other.to_string(),
            }),
        }
    }
}

/// Static description of a provider.
///
/// Obtain via [`get_all_provider_metadata()`](crate::get_all_provider_metadata).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier.
    pub id: ProviderId,
    /// Human-readable provider name.
    pub name: &'static str,
    /// Short description of the provider.
    pub description: &'static str,
    /// Default API base URL (overridable via [`ClientConfig`](crate::ClientConfig)).
    pub default_base_url: &'static str,
    /// Query parameter carrying the API key, when the provider needs one.
    pub api_key_param: Option<&'static str>,
    /// Environment variable the API key is read from.
    pub api_key_env: Option<&'static str>,
}

impl ProviderMetadata {
    /// Whether requests to this provider must carry an API key.
    pub fn requires_api_key(&self) -> bool {
        self.api_key_param.is_some()
    }
}

// ============ Candidate Types ============

/// A latitude/longitude pair in decimal degrees. Both values are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `"<lat>,<lng>"`, the place query consumed by map displays.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// One normalized, displayable location derived from a provider response.
///
/// `index` is the position of the source entry in the provider's result array, so
/// `candidates[i].index == i` always holds and the index can be passed straight back
/// to [`coordinate_of`](crate::coordinate_of).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Position in the provider's result array.
    pub index: usize,
    /// Best-effort human-readable address.
    pub label: String,
    /// `None` when the entry carries no usable coordinate.
    pub coordinate: Option<Coordinate>,
}

/// Result of one geocoding round trip: the untouched response plus the candidates
/// derived from it, always from the same provider.
#[derive(Debug, Clone)]
pub struct GeocodeOutcome {
    /// Provider the response came from.
    pub provider: ProviderId,
    /// Raw provider payload.
    pub raw: Value,
    /// Candidates derived from `raw`.
    pub candidates: Vec<Candidate>,
}

impl GeocodeOutcome {
    /// Whether the provider returned no results.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

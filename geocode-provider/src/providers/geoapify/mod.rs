//! Geoapify Geocoding Provider
//!
//! 响应为 GeoJSON FeatureCollection。

use serde_json::Value;

use crate::providers::common::{geojson_coordinate, geojson_features, geojson_label};
use crate::traits::GeocodeProvider;
use crate::types::{Coordinate, ProviderId, ProviderMetadata};

pub(crate) const GEOAPIFY_API_BASE: &str = "https://api.geoapify.com";

/// Geoapify Provider
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoapifyProvider;

impl GeocodeProvider for GeoapifyProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Geoapify
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderId::Geoapify,
            name: "Geoapify",
            description: "Geoapify Geocoding API (GeoJSON)",
            default_base_url: GEOAPIFY_API_BASE,
            api_key_param: Some("apiKey"),
            api_key_env: Some("GEOAPIFY_API_KEY"),
        }
    }

    fn request_target(&self, base_url: &str, address: &str) -> String {
        format!("{base_url}/v1/geocode/search?format=geojson&text={address}")
    }

    fn results<'a>(&self, raw: &'a Value) -> &'a [Value] {
        geojson_features(raw)
    }

    fn entry_coordinate(&self, entry: &Value) -> Result<Coordinate, String> {
        geojson_coordinate(entry)
    }

    fn entry_label<'a>(&self, entry: &'a Value) -> Option<&'a str> {
        geojson_label(entry)
    }
}

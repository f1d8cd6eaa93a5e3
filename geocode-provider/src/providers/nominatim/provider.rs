//! Nominatim GeocodeProvider trait 实现

use serde_json::Value;

use crate::traits::{GeocodeProvider, non_empty_str, parse_entry};
use crate::types::{Coordinate, ProviderId, ProviderMetadata};

use super::{NOMINATIM_API_BASE, NominatimPlace, NominatimProvider};

impl GeocodeProvider for NominatimProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Nominatim
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderId::Nominatim,
            name: "Self-host",
            description: "Nominatim (OpenStreetMap) geocoder, public or self-hosted",
            default_base_url: NOMINATIM_API_BASE,
            api_key_param: None,
            api_key_env: None,
        }
    }

    fn request_target(&self, base_url: &str, address: &str) -> String {
        format!("{base_url}/search?format=json&q={address}")
    }

    /// 响应本身就是结果数组
    fn results<'a>(&self, raw: &'a Value) -> &'a [Value] {
        raw.as_array().map_or(&[], Vec::as_slice)
    }

    fn entry_coordinate(&self, entry: &Value) -> std::result::Result<Coordinate, String> {
        let place: NominatimPlace = parse_entry(entry)?;
        Ok(Coordinate::new(place.lat, place.lon))
    }

    fn entry_label<'a>(&self, entry: &'a Value) -> Option<&'a str> {
        non_empty_str(entry, "/display_name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_target_uses_json_format() {
        assert_eq!(
            NominatimProvider.request_target("http://nominatim.local:8080", "Centro, Curitiba"),
            "http://nominatim.local:8080/search?format=json&q=Centro, Curitiba"
        );
    }

    #[test]
    fn coordinate_from_string_fields() {
        let entry = json!({"lat": "-23.5", "lon": "-46.6"});
        assert_eq!(
            NominatimProvider.entry_coordinate(&entry),
            Ok(Coordinate::new(-23.5, -46.6))
        );
    }

    #[test]
    fn non_numeric_lat_is_rejected() {
        let entry = json!({"lat": "abc", "lon": "-46.6"});
        assert!(NominatimProvider.entry_coordinate(&entry).is_err());
    }

    #[test]
    fn object_root_has_no_results() {
        assert!(NominatimProvider.results(&json!({"error": "Unable to geocode"})).is_empty());
    }
}

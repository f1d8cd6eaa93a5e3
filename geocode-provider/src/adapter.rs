//! Provider-agnostic result adapter.
//!
//! Four pure operations that hide how each provider shapes its response:
//!
//! | Provider | Result list | Coordinate | Label |
//! |----------|-------------|------------|-------|
//! | google | `results[]` | `geometry.location.{lat,lng}` | `formatted_address` |
//! | nominatim | root array | `{lat,lon}` (strings) | `display_name` |
//! | geoapify | `features[]` | `geometry.coordinates` as `[lng, lat]` | `properties.formatted` / `address_line1` |
//! | maptiler | `features[]` | `geometry.coordinates` as `[lng, lat]` | `properties.formatted` / `address_line1` |

use serde_json::Value;

use crate::error::{GeocodeError, Result};
use crate::factory::provider_for;
use crate::providers::common::normalize_base_url;
use crate::types::{Candidate, Coordinate, ProviderId};

/// Label used when an entry carries no address field.
pub const UNKNOWN_ADDRESS: &str = "Unknown address";

/// Builds the request target (endpoint + query) for a provider id string.
///
/// The address is embedded as-is; escaping is the transport's job.
///
/// ```rust
/// let target = geocode_provider::build_request_target("nominatim", "Curitiba").unwrap();
/// assert_eq!(target, "https://nominatim.openstreetmap.org/search?format=json&q=Curitiba");
///
/// assert!(geocode_provider::build_request_target("bing", "Curitiba").is_err());
/// ```
pub fn build_request_target(provider_id: &str, address: &str) -> Result<String> {
    let id: ProviderId = provider_id.parse()?;
    Ok(id.request_target(address))
}

impl ProviderId {
    /// Request target against the provider's default endpoint.
    pub fn request_target(self, address: &str) -> String {
        let adapter = provider_for(self);
        adapter.request_target(adapter.metadata().default_base_url, address)
    }

    /// Request target against an overridden base URL (self-hosted or test servers).
    pub fn request_target_with_base(self, base_url: &str, address: &str) -> String {
        provider_for(self).request_target(normalize_base_url(base_url), address)
    }
}

/// Lists every entry of the provider's result array as a [`Candidate`].
///
/// A missing or malformed result array yields an empty vector. Entries whose coordinate
/// cannot be read are kept (with `coordinate: None`) so positions stay aligned with the
/// raw response.
pub fn list_candidates(raw: &Value, provider: ProviderId) -> Vec<Candidate> {
    let adapter = provider_for(provider);
    adapter
        .results(raw)
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let coordinate = match adapter.entry_coordinate(entry) {
                Ok(c) => Some(c),
                Err(detail) => {
                    log::debug!("[{provider}] candidate {index} has no coordinate: {detail}");
                    None
                }
            };
            Candidate {
                index,
                label: label_of(entry, provider),
                coordinate,
            }
        })
        .collect()
}

/// Extracts the coordinate of the candidate at `index`.
///
/// Fails with [`GeocodeError::MalformedResponse`] when the index is out of range or the
/// entry's coordinate fields are absent, non-numeric or non-finite.
pub fn coordinate_of(raw: &Value, provider: ProviderId, index: usize) -> Result<Coordinate> {
    let adapter = provider_for(provider);
    let results = adapter.results(raw);
    let malformed = |detail: String| GeocodeError::MalformedResponse {
        provider: provider.to_string(),
        index,
        detail,
    };

    let entry = results.get(index).ok_or_else(|| {
        malformed(format!(
            "index out of range ({} result{})",
            results.len(),
            if results.len() == 1 { "" } else { "s" }
        ))
    })?;

    adapter.entry_coordinate(entry).map_err(malformed)
}

/// Extracts a display label from one raw result entry. Never fails.
pub fn label_of(entry: &Value, provider: ProviderId) -> String {
    provider_for(provider)
        .entry_label(entry)
        .unwrap_or(UNKNOWN_ADDRESS)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_target_for_every_provider() {
        let cases = [
            (
                "google",
                "https://maps.googleapis.com/maps/api/geocode/json?address=Rua X, 1",
            ),
            (
                "nominatim",
                "https://nominatim.openstreetmap.org/search?format=json&q=Rua X, 1",
            ),
            (
                "geoapify",
                "https://api.geoapify.com/v1/geocode/search?format=geojson&text=Rua X, 1",
            ),
            ("maptiler", "https://api.maptiler.com/geocoding/Rua X, 1.json"),
        ];
        for (id, expected) in cases {
            assert_eq!(build_request_target(id, "Rua X, 1").ok().as_deref(), Some(expected));
        }
    }

    #[test]
    fn request_target_unknown_provider() {
        let err = build_request_target("nominatium", "x");
        assert!(
            matches!(&err, Err(GeocodeError::UnsupportedProvider { provider }) if provider == "nominatium"),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn request_target_with_overridden_base() {
        assert_eq!(
            ProviderId::Nominatim.request_target_with_base("http://127.0.0.1:7070/", "Lapa"),
            "http://127.0.0.1:7070/search?format=json&q=Lapa"
        );
    }

    #[test]
    fn candidates_keep_positions_when_entry_is_broken() {
        let raw = json!([
            {"display_name": "Broken"},
            {"lat": "1.5", "lon": "2.5", "display_name": "Good"}
        ]);
        let candidates = list_candidates(&raw, ProviderId::Nominatim);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].coordinate, None);
        assert_eq!(candidates[1].index, 1);
        assert_eq!(candidates[1].coordinate, Some(Coordinate::new(1.5, 2.5)));
    }

    #[test]
    fn out_of_range_message_pluralizes() {
        let raw = json!({"results": [{"geometry": {"location": {"lat": 1, "lng": 2}}}]});
        let err = coordinate_of(&raw, ProviderId::Google, 1);
        assert!(
            matches!(&err, Err(GeocodeError::MalformedResponse { detail, index: 1, .. }) if detail == "index out of range (1 result)"),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn label_placeholder_when_missing() {
        assert_eq!(label_of(&json!({}), ProviderId::Google), UNKNOWN_ADDRESS);
        assert_eq!(
            label_of(&json!({"display_name": 42}), ProviderId::Nominatim),
            UNKNOWN_ADDRESS
        );
    }
}

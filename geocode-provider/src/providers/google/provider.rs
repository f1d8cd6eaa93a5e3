//! Google GeocodeProvider trait 实现

use serde_json::Value;

use crate::error::{GeocodeError, Result};
use crate::traits::{GeocodeProvider, non_empty_str, parse_entry};
use crate::types::{Coordinate, ProviderId, ProviderMetadata};

use super::{GOOGLE_API_BASE, GoogleGeocodeResult, GoogleProvider, GoogleStatus};

impl GeocodeProvider for GoogleProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Google
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderId::Google,
            name: "Google",
            description: "Google Maps Geocoding API",
            default_base_url: GOOGLE_API_BASE,
            api_key_param: Some("key"),
            api_key_env: Some("GOOGLE_MAPS_API_KEY"),
        }
    }

    fn request_target(&self, base_url: &str, address: &str) -> String {
        format!("{base_url}/maps/api/geocode/json?address={address}")
    }

    fn results<'a>(&self, raw: &'a Value) -> &'a [Value] {
        raw.get("results")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    fn entry_coordinate(&self, entry: &Value) -> std::result::Result<Coordinate, String> {
        let result: GoogleGeocodeResult = parse_entry(entry)?;
        let location = result.geometry.location;
        Ok(Coordinate::new(location.lat, location.lng))
    }

    fn entry_label<'a>(&self, entry: &'a Value) -> Option<&'a str> {
        non_empty_str(entry, "/formatted_address")
    }

    /// Google 即使出错也返回 HTTP 200，错误放在 `status` 字段中
    /// `OK` / `ZERO_RESULTS` 视为正常，`OVER_QUERY_LIMIT` 视为限流
    fn check_response(&self, raw: &Value) -> Result<()> {
        let Ok(GoogleStatus {
            status: Some(status),
            error_message,
        }) = parse_entry::<GoogleStatus>(raw)
        else {
            return Ok(());
        };

        match status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(()),
            "OVER_QUERY_LIMIT" => Err(GeocodeError::RateLimited {
                provider: self.id().to_string(),
                retry_after: None,
                raw_message: error_message,
            }),
            _ => Err(GeocodeError::ApiError {
                provider: self.id().to_string(),
                status: None,
                raw_message: Some(match error_message {
                    Some(msg) => format!("{status}: {msg}"),
                    None => status,
                }),
            }),
        }
    }
}

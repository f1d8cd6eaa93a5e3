//! MapTiler Geocoding Provider
//!
//! 响应为 GeoJSON FeatureCollection，查询文本位于路径中。

use serde_json::Value;
use url::Url;

use crate::providers::common::{geojson_coordinate, geojson_features, geojson_label};
use crate::traits::GeocodeProvider;
use crate::types::{Coordinate, ProviderId, ProviderMetadata};

pub(crate) const MAPTILER_API_BASE: &str = "https://api.maptiler.com";

/// MapTiler Provider
#[derive(Debug, Default, Clone, Copy)]
pub struct MaptilerProvider;

impl GeocodeProvider for MaptilerProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Maptiler
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderId::Maptiler,
            name: "MapTiler",
            description: "MapTiler Geocoding API (GeoJSON)",
            default_base_url: MAPTILER_API_BASE,
            api_key_param: Some("key"),
            api_key_env: Some("MAPTILER_API_KEY"),
        }
    }

    fn request_target(&self, base_url: &str, address: &str) -> String {
        format!("{base_url}/geocoding/{address}.json")
    }

    /// 地址作为单个路径段写入，`/`、`#`、`?` 等都会被转义
    fn request_url(&self, base_url: &str, address: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("geocoding")
            .push(&format!("{address}.json"));
        Ok(url)
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

//! Provider 公共工具函数

use serde::Deserialize;
use serde_json::Value;

use crate::traits::parse_entry;
use crate::types::Coordinate;
use crate::utils::degrees::Degrees;

// ============ GeoJSON ============

/// GeoJSON Feature（仅解析坐标所需字段）
#[derive(Debug, Deserialize)]
pub struct GeoJsonFeature {
    pub geometry: GeoJsonGeometry,
}

/// GeoJSON Geometry，坐标顺序为 `[经度, 纬度, (海拔)]`
#[derive(Debug, Deserialize)]
pub struct GeoJsonGeometry {
    pub coordinates: Vec<Degrees>,
}

/// 取出 FeatureCollection 的 `features` 数组
pub fn geojson_features(raw: &Value) -> &[Value] {
    raw.get("features")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// 从 GeoJSON Feature 提取坐标
///
/// GeoJSON 使用 `[lon, lat]` 顺序，与 Google / Nominatim 相反，这里翻转为 (lat, lng)。
pub fn geojson_coordinate(entry: &Value) -> Result<Coordinate, String> {
    let feature: GeoJsonFeature = parse_entry(entry)?;
    match feature.geometry.coordinates.as_slice() {
        [Degrees(lon), Degrees(lat), ..] => Ok(Coordinate::new(*lat, *lon)),
        other => Err(format!(
            "geometry.coordinates needs [longitude, latitude], got {} value(s)",
            other.len()
        )),
    }
}

/// GeoJSON Feature 的标签：`properties.formatted`，回退到 `properties.address_line1`
pub fn geojson_label(entry: &Value) -> Option<&str> {
    crate::traits::non_empty_str(entry, "/properties/formatted")
        .or_else(|| crate::traits::non_empty_str(entry, "/properties/address_line1"))
}

// ============ URL ============

/// 去掉 base URL 末尾的斜杠
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

//! Google Geocoding API 类型定义

use serde::Deserialize;

use crate::utils::degrees;

/// Google 响应顶层的状态字段
#[derive(Debug, Deserialize)]
pub struct GoogleStatus {
    pub status: Option<String>,
    pub error_message: Option<String>,
}

/// `results[]` 中的单个条目
#[derive(Debug, Deserialize)]
pub struct GoogleGeocodeResult {
    pub geometry: GoogleGeometry,
}

#[derive(Debug, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLatLng,
}

#[derive(Debug, Deserialize)]
pub struct GoogleLatLng {
    #[serde(deserialize_with = "degrees::deserialize")]
    pub lat: f64,
    #[serde(deserialize_with = "degrees::deserialize")]
    pub lng: f64,
}

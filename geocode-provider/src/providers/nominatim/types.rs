//! Nominatim 类型定义

use serde::Deserialize;

use crate::utils::degrees;

/// `/search?format=json` 返回数组中的单个地点
///
/// Nominatim 以字符串形式返回经纬度，如 `"lat": "-23.5"`。
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    #[serde(deserialize_with = "degrees::deserialize")]
    pub lat: f64,
    #[serde(deserialize_with = "degrees::deserialize")]
    pub lon: f64,
}

//! 经纬度反序列化工具
//!
//! 各 Provider 对坐标的编码方式不同：
//! - Google / GeoJSON: JSON 数字
//! - Nominatim: 数字字符串（如 `"-23.5"`）
//!
//! 统一解析为有限的 `f64`，NaN / 无穷 / 非数字字符串一律视为格式错误。

use serde::{Deserialize, Deserializer};

/// 一个以十进制度表示的数值（纬度或经度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degrees(pub f64);

impl<'de> Deserialize<'de> for Degrees {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(f64),
            String(String),
        }

        let value = match NumberOrString::deserialize(deserializer)
            .map_err(|_| Error::custom("expected a number or numeric string"))?
        {
            NumberOrString::Number(n) => n,
            NumberOrString::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::custom(format!("non-numeric coordinate: {s:?}")))?,
        };

        if value.is_finite() {
            Ok(Degrees(value))
        } else {
            Err(Error::custom(format!("non-finite coordinate: {value}")))
        }
    }
}

/// 反序列化单个经纬度字段（用于 `#[serde(deserialize_with = ...)]`）
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Degrees::deserialize(deserializer).map(|d| d.0)
}

//! 共享测试工具和辅助函数

#![allow(dead_code)]

use serde_json::{Value, json};

use geocode_provider::{ClientConfig, GeocodeClient, ProviderId};

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 坐标比较容差
pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// ============ 响应样本 ============

/// Google：两个结果，第二个无地址
pub fn google_fixture() -> Value {
    json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": "Av. Paulista, 1578 - Bela Vista, São Paulo - SP, Brazil",
                "geometry": { "location": { "lat": -23.5613, "lng": -46.6565 } },
                "place_id": "ChIJ0WGkg4FEzpQRrlsz_whLqZs"
            },
            {
                "geometry": { "location": { "lat": -23.55, "lng": -46.63 } }
            }
        ]
    })
}

/// Nominatim：根数组，坐标为字符串
pub fn nominatim_fixture() -> Value {
    json!([
        { "lat": "-23.5", "lon": "-46.6", "display_name": "São Paulo" }
    ])
}

/// GeoJSON FeatureCollection（Geoapify / MapTiler），坐标顺序为 `[lon, lat]`
pub fn geojson_fixture() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "formatted": "São Paulo, Brazil" },
                "geometry": { "type": "Point", "coordinates": [-46.6, -23.5] }
            },
            {
                "type": "Feature",
                "properties": { "address_line1": "Rua Augusta" },
                "geometry": { "type": "Point", "coordinates": [-46.65, -23.55] }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [] }
            }
        ]
    })
}

/// 各 Provider 的空结果响应
pub fn empty_fixture(provider: ProviderId) -> Value {
    match provider {
        ProviderId::Google => json!({ "status": "ZERO_RESULTS", "results": [] }),
        ProviderId::Nominatim => json!([]),
        ProviderId::Geoapify | ProviderId::Maptiler => {
            json!({ "type": "FeatureCollection", "features": [] })
        }
    }
}

// ============ 客户端 ============

/// 指向 mock server 的配置：不重试，短超时
pub fn mock_config(provider: ProviderId, base_url: &str) -> ClientConfig {
    let mut config = ClientConfig::default().with_endpoint(provider, base_url);
    config.max_retries = 0;
    config.request_timeout_secs = 5;
    config
}

pub fn mock_client(config: ClientConfig) -> GeocodeClient {
    match GeocodeClient::new(config) {
        Ok(client) => client,
        Err(e) => panic!("failed to build client: {e}"),
    }
}

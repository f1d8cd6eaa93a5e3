//! HTTP 传输层测试（wiremock）

mod common;

use std::time::Duration;

use common::{mock_client, mock_config, nominatim_fixture};
use geocode_provider::{GeocodeError, ProviderId};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_geocode_nominatim_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("q", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(mock_config(ProviderId::Nominatim, &server.uri()));
    let outcome = require_ok!(client.geocode(ProviderId::Nominatim, "São Paulo").await);

    assert_eq!(outcome.provider, ProviderId::Nominatim);
    assert_eq!(outcome.raw, nominatim_fixture());
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].label, "São Paulo");
}

#[tokio::test]
async fn test_address_with_query_delimiters_reaches_server_intact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Rua A & B #5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(mock_config(ProviderId::Nominatim, &server.uri()));
    let outcome = require_ok!(client.geocode(ProviderId::Nominatim, "Rua A & B #5").await);
    assert_eq!(outcome.candidates.len(), 1);
}

#[tokio::test]
async fn test_api_key_is_sent_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .and(query_param("format", "geojson"))
        .and(query_param("text", "Recife"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "FeatureCollection", "features": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(ProviderId::Geoapify, &server.uri())
        .with_api_key(ProviderId::Geoapify, "test-key");
    let client = mock_client(config);
    let outcome = require_ok!(client.geocode(ProviderId::Geoapify, "Recife").await);
    assert!(outcome.is_empty());
}

#[tokio::test]
async fn test_maptiler_address_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocoding/Porto%20Alegre.json"))
        .and(query_param("key", "mt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [{
                "properties": {"formatted": "Porto Alegre"},
                "geometry": {"coordinates": [-51.23, -30.03]}
            }]
        })))
        .mount(&server)
        .await;

    let config = mock_config(ProviderId::Maptiler, &server.uri())
        .with_api_key(ProviderId::Maptiler, "mt");
    let client = mock_client(config);
    let outcome = require_ok!(client.geocode(ProviderId::Maptiler, "Porto Alegre").await);
    let coord = require_some!(outcome.candidates[0].coordinate);
    assert!(common::approx_eq(coord.latitude, -30.03));
    assert!(common::approx_eq(coord.longitude, -51.23));
}

#[tokio::test]
async fn test_google_error_status_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(mock_config(ProviderId::Google, &server.uri()));
    let err = client.search(ProviderId::Google, "Lapa").await;
    assert!(
        matches!(
            &err,
            Err(GeocodeError::ApiError { status: None, raw_message: Some(msg), .. })
                if msg == "REQUEST_DENIED: The provided API key is invalid."
        ),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid apiKey"))
        .mount(&server)
        .await;

    let client = mock_client(mock_config(ProviderId::Geoapify, &server.uri()));
    let err = client.search(ProviderId::Geoapify, "Recife").await;
    assert!(
        matches!(
            &err,
            Err(GeocodeError::ApiError { status: Some(401), raw_message: Some(msg), .. })
                if msg == "Invalid apiKey"
        ),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = mock_client(mock_config(ProviderId::Nominatim, &server.uri()));
    let err = client.search(ProviderId::Nominatim, "Natal").await;
    assert!(
        matches!(&err, Err(GeocodeError::ParseError { provider, .. }) if provider == "nominatim"),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn test_rate_limited_reports_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let client = mock_client(mock_config(ProviderId::Nominatim, &server.uri()));
    let err = client.search(ProviderId::Nominatim, "Natal").await;
    assert!(
        matches!(&err, Err(GeocodeError::RateLimited { retry_after: Some(7), .. })),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn test_retries_transient_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_fixture()))
        .mount(&server)
        .await;

    let mut config = mock_config(ProviderId::Nominatim, &server.uri());
    config.max_retries = 2;
    let client = mock_client(config);
    let outcome = require_ok!(client.geocode(ProviderId::Nominatim, "São Paulo").await);
    assert_eq!(outcome.candidates.len(), 1);
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .expect(2)
        .mount(&server)
        .await;

    let mut config = mock_config(ProviderId::Nominatim, &server.uri());
    config.max_retries = 1;
    let client = mock_client(config);
    let err = client.search(ProviderId::Nominatim, "Natal").await;
    assert!(
        matches!(&err, Err(GeocodeError::NetworkError { .. })),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = mock_config(ProviderId::Nominatim, &server.uri());
    config.request_timeout_secs = 1;
    let client = mock_client(config);
    let err = client.search(ProviderId::Nominatim, "Natal").await;
    assert!(
        matches!(&err, Err(GeocodeError::Timeout { .. })),
        "unexpected: {err:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // 端口 9 (discard) 通常无人监听
    let client = mock_client(mock_config(ProviderId::Nominatim, "http://127.0.0.1:9"));
    let err = client.search(ProviderId::Nominatim, "Natal").await;
    assert!(
        matches!(&err, Err(GeocodeError::NetworkError { .. })),
        "unexpected: {err:?}"
    );
}

//! HTTP 传输工具
//!
//! 统一的请求发送、状态码分类、日志与重试逻辑。各 Provider 只负责构造请求地址，
//! 传输层对所有 Provider 一致。

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{GeocodeError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// 限流时最多等待的秒数
const MAX_RETRY_AFTER_SECS: u64 = 30;
/// 指数退避上限（毫秒）
const MAX_BACKOFF_MS: u64 = 10_000;

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 发送请求并返回成功响应的正文
    ///
    /// Status handling:
    /// - 429 becomes [`GeocodeError::RateLimited`] (honouring `Retry-After`)
    /// - 502/503/504 become [`GeocodeError::NetworkError`] so they are retried
    /// - any other non-2xx becomes [`GeocodeError::ApiError`]
    ///
    /// `url_for_log` must already have secrets redacted.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        url_for_log: &str,
    ) -> Result<String> {
        log::debug!("[{provider_name}] GET {url_for_log}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodeError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                GeocodeError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // 读取 body 前先取出 Retry-After
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(GeocodeError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: non_empty(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(GeocodeError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| GeocodeError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if !(200..300).contains(&status_code) {
            log::warn!("[{provider_name}] Request rejected (HTTP {status_code})");
            return Err(GeocodeError::ApiError {
                provider: provider_name.to_string(),
                status: Some(status_code),
                raw_message: non_empty(truncate_for_log(&response_text)),
            });
        }

        Ok(response_text)
    }

    /// 解析 JSON 响应
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            GeocodeError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// 发送请求（带重试）
    ///
    /// Retries [retryable](GeocodeError::is_retryable) failures up to `max_retries`
    /// times with exponential backoff (100ms, 200ms, 400ms, ... capped at 10s). A
    /// rate-limit response with `Retry-After` waits that long instead, capped at 30s.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        url_for_log: &str,
        max_retries: u32,
    ) -> Result<String> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, provider_name, url_for_log).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder 只能使用一次
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, provider_name, url_for_log).await;
            };

            match Self::execute_request(req, provider_name, url_for_log).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        attempt + 1,
                        max_retries + 1,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| GeocodeError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

fn non_empty(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

/// 计算重试延迟：限流且带 `retry_after` 时使用该值，否则指数退避
fn retry_delay(error: &GeocodeError, attempt: u32) -> Duration {
    if let GeocodeError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS))
    } else {
        backoff_delay(attempt)
    }
}

/// 指数退避：100ms, 200ms, 400ms, ... 上限 10 秒
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // 防止 2^attempt 溢出
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // 100 * 2^7 = 12800ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_is_honoured_and_capped() {
        let short = GeocodeError::RateLimited {
            provider: "nominatim".into(),
            retry_after: Some(2),
            raw_message: None,
        };
        assert_eq!(retry_delay(&short, 0), Duration::from_secs(2));

        let long = GeocodeError::RateLimited {
            provider: "nominatim".into(),
            retry_after: Some(3600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&long, 0), Duration::from_secs(30));
    }

    #[test]
    fn rate_limited_without_header_backs_off() {
        let e = GeocodeError::RateLimited {
            provider: "google".into(),
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 2), Duration::from_millis(400));
    }

    #[test]
    fn retryable_classification() {
        let network = GeocodeError::NetworkError {
            provider: "google".into(),
            detail: "refused".into(),
        };
        let api = GeocodeError::ApiError {
            provider: "google".into(),
            status: Some(400),
            raw_message: None,
        };
        let parse = GeocodeError::ParseError {
            provider: "google".into(),
            detail: "eof".into(),
        };
        assert!(network.is_retryable());
        assert!(!api.is_retryable());
        assert!(!parse.is_retryable());
    }

    #[test]
    fn parse_json_valid() {
        let value: serde_json::Value = require_parse(r#"{"results":[]}"#);
        assert_eq!(value["results"], serde_json::json!([]));
    }

    fn require_parse(text: &str) -> serde_json::Value {
        match HttpUtils::parse_json(text, "test") {
            Ok(v) => v,
            Err(e) => panic!("parse failed: {e}"),
        }
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<serde_json::Value> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(GeocodeError::ParseError { provider, .. }) if provider == "test"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn blank_body_becomes_none() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }
}

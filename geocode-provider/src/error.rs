use serde::{Deserialize, Serialize};

/// Unified error type for all geocoding operations.
///
/// Provider-facing variants include a `provider` field identifying which backend the
/// failure relates to. All variants are serializable for structured error reporting.
///
/// An empty result list is **not** an error: [`list_candidates`](crate::list_candidates)
/// returns an empty vector instead. Only caller bugs (unknown provider, out-of-range index)
/// and transport failures surface here.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API rate limit exceeded
///
/// [`GeocodeClient`](crate::GeocodeClient) retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GeocodeError {
    /// The provider id is not one of the known backends.
    UnsupportedProvider {
        /// The id that was requested.
        provider: String,
    },

    /// The candidate at `index` has no extractable coordinate.
    ///
    /// Raised when the index is out of range or the coordinate fields are absent,
    /// non-numeric or non-finite.
    MalformedResponse {
        /// Provider whose response was being read.
        provider: String,
        /// Requested candidate index.
        index: usize,
        /// What was missing or wrong.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider rejected the request (non-success HTTP status or an error status
    /// embedded in the body).
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code, if the rejection came from the transport layer.
        status: Option<u16>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The response body was not valid JSON.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The request could not be built (bad endpoint override, HTTP client setup failure).
    InvalidRequest {
        /// Provider the request was for.
        provider: String,
        /// Details about what went wrong.
        detail: String,
    },
}

impl GeocodeError {
    /// 是否为预期行为（用户输入、无效响应等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedProvider { .. }
                | Self::MalformedResponse { .. }
                | Self::RateLimited { .. }
                | Self::ApiError { .. }
        )
    }

    /// 是否可重试（网络错误、超时、限流）
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Provider identifier the error relates to.
    pub fn provider(&self) -> &str {
        match self {
            Self::UnsupportedProvider { provider }
            | Self::MalformedResponse { provider, .. }
            | Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::InvalidRequest { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedProvider { provider } => {
                write!(f, "Unsupported provider: {provider}")
            }
            Self::MalformedResponse {
                provider,
                index,
                detail,
            } => {
                write!(
                    f,
                    "[{provider}] Malformed response at candidate {index}: {detail}"
                )
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::ApiError {
                provider,
                status,
                raw_message,
            } => match (status, raw_message) {
                (Some(code), Some(msg)) => write!(f, "[{provider}] API error (HTTP {code}): {msg}"),
                (Some(code), None) => write!(f, "[{provider}] API error (HTTP {code})"),
                (None, Some(msg)) => write!(f, "[{provider}] API error: {msg}"),
                (None, None) => write!(f, "[{provider}] API error"),
            },
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::InvalidRequest { provider, detail } => {
                write!(f, "[{provider}] Invalid request: {detail}")
            }
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Convenience type alias for `Result<T, GeocodeError>`.
pub type Result<T> = std::result::Result<T, GeocodeError>;

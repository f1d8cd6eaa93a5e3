//! Log sanitization utilities
//!
//! Geocoding payloads can be large (Nominatim returns full polygons on request) and
//! echo back the user's address, so bodies are truncated before they reach the logs.

/// Maximum number of bytes of a payload included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body or URL for logging.
///
/// Strings within the limit are returned unchanged; longer ones keep their first
/// `TRUNCATE_LIMIT` bytes (never splitting a character) and note the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Replace the value of an API key query parameter before a URL is logged.
pub fn redact_query_param(url: &str, param: &str) -> String {
    let needle = format!("{param}=");
    let Some(start) = url.find(&needle) else {
        return url.to_string();
    };
    let value_start = start + needle.len();
    let value_end = url[value_start..]
        .find('&')
        .map_or(url.len(), |offset| value_start + offset);
    format!("{}***{}", &url[..value_start], &url[value_end..])
}

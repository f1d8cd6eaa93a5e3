//! Utility modules.

/// Lenient decimal-degree deserialization shared by provider response types.
pub mod degrees;

/// Log sanitization utilities to keep provider payloads out of full-length logs.
pub mod log_sanitizer;

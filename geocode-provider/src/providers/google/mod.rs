//! Google Geocoding API Provider

mod provider;
mod types;

pub(crate) use types::{GoogleGeocodeResult, GoogleStatus};

pub(crate) const GOOGLE_API_BASE: &str = "https://maps.googleapis.com";

/// Google Geocoding Provider
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleProvider;

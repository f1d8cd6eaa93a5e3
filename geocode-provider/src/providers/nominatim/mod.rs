//! Nominatim (OpenStreetMap) Provider
//!
//! 通常为自建实例，base URL 可通过 `ClientConfig` 覆盖。

mod provider;
mod types;

pub(crate) use types::NominatimPlace;

pub(crate) const NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Nominatim Provider
#[derive(Debug, Default, Clone, Copy)]
pub struct NominatimProvider;

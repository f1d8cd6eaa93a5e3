//! Geocoding provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod geoapify;
mod google;
mod maptiler;
mod nominatim;

pub use geoapify::GeoapifyProvider;
pub use google::GoogleProvider;
pub use maptiler::MaptilerProvider;
pub use nominatim::NominatimProvider;

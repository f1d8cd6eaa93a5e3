//! # geocode-provider
//!
//! A uniform adapter over several forward-geocoding services: one request builder,
//! one candidate list, one coordinate accessor, whatever the backend.
//!
//! ## Supported Providers
//!
//! | Provider | Id | API key |
//! |----------|----|---------|
//! | [Google Geocoding](https://developers.google.com/maps/documentation/geocoding) | `google` | `GOOGLE_MAPS_API_KEY` |
//! | [Nominatim](https://nominatim.org/) (self-hostable) | `nominatim` | none |
//! | [Geoapify](https://www.geoapify.com/) | `geoapify` | `GEOAPIFY_API_KEY` |
//! | [MapTiler](https://www.maptiler.com/cloud/geocoding/) | `maptiler` | `MAPTILER_API_KEY` |
//!
//! Geoapify and MapTiler answer with GeoJSON, whose positions are `[longitude, latitude]`;
//! the adapter swaps them so every [`Coordinate`] reads latitude first.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! The adapter functions are pure and work on any JSON you already have:
//!
//! ```rust
//! use geocode_provider::{coordinate_of, list_candidates, ProviderId};
//! use serde_json::json;
//!
//! let raw = json!([{ "lat": "-23.5", "lon": "-46.6", "display_name": "São Paulo" }]);
//!
//! let candidates = list_candidates(&raw, ProviderId::Nominatim);
//! assert_eq!(candidates[0].label, "São Paulo");
//!
//! let coord = coordinate_of(&raw, ProviderId::Nominatim, 0).unwrap();
//! assert_eq!(coord.to_query_string(), "-23.5,-46.6");
//! ```
//!
//! [`GeocodeClient`] performs the HTTP round trip:
//!
//! ```rust,no_run
//! use geocode_provider::{validate_address, ClientConfig, GeocodeClient, ProviderId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let address = validate_address("Avenida Paulista 1578, São Paulo")?;
//!     let client = GeocodeClient::new(ClientConfig::from_env())?;
//!     let outcome = client.geocode(ProviderId::Google, address).await?;
//!     println!("{} candidates", outcome.candidates.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, GeocodeError>`](GeocodeError). An empty result
//! list is not an error. Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are
//! retried with exponential backoff by [`GeocodeClient`].
//!
//! Input validation is a separate channel: [`validate_address`] returns an
//! [`AddressValidationError`] before any request is built.

mod adapter;
mod client;
mod config;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;
mod validation;

pub use error::{GeocodeError, Result};

pub use adapter::{UNKNOWN_ADDRESS, build_request_target, coordinate_of, label_of, list_candidates};

pub use client::GeocodeClient;
pub use config::ClientConfig;

pub use factory::{get_all_provider_metadata, provider_for};

pub use traits::GeocodeProvider;

pub use types::{Candidate, Coordinate, GeocodeOutcome, ProviderId, ProviderMetadata};

pub use validation::{AddressValidationError, validate_address};

pub use utils::log_sanitizer;

pub use providers::{GeoapifyProvider, GoogleProvider, MaptilerProvider, NominatimProvider};

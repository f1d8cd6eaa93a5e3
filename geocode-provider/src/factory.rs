//! Provider dispatch and metadata.

use crate::providers::{GeoapifyProvider, GoogleProvider, MaptilerProvider, NominatimProvider};
use crate::traits::GeocodeProvider;
use crate::types::{ProviderId, ProviderMetadata};

static GOOGLE: GoogleProvider = GoogleProvider;
static NOMINATIM: NominatimProvider = NominatimProvider;
static GEOAPIFY: GeoapifyProvider = GeoapifyProvider;
static MAPTILER: MaptilerProvider = MaptilerProvider;

/// Returns the stateless adapter for the given provider.
///
/// # Examples
///
/// ```rust
/// use geocode_provider::{provider_for, GeocodeProvider, ProviderId};
///
/// let adapter = provider_for(ProviderId::Nominatim);
/// assert_eq!(adapter.id(), ProviderId::Nominatim);
/// ```
pub fn provider_for(id: ProviderId) -> &'static dyn GeocodeProvider {
    match id {
        ProviderId::Google => &GOOGLE,
        ProviderId::Nominatim => &NOMINATIM,
        ProviderId::Geoapify => &GEOAPIFY,
        ProviderId::Maptiler => &MAPTILER,
    }
}

/// Returns metadata for every supported provider, in display order.
///
/// Useful for building provider pickers.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    ProviderId::ALL
        .iter()
        .map(|id| provider_for(*id).metadata())
        .collect()
}

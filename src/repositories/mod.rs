use async_trait::async_trait;
use crate::models::place::{GeoPoint, RawPlaceDetails, RawPlaceSummary};

pub mod google_places_repo;
pub mod photo_redirect_repo;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn find_nearby(
        &self,
        origin: GeoPoint,
        radius_meters: u32,
    ) -> anyhow::Result<Vec<RawPlaceSummary>>;
}

#[async_trait]
pub trait DetailsProvider: Send + Sync {
    async fn get_details(
        &self,
        place_id: &str,
    ) -> anyhow::Result<RawPlaceDetails>;
}

/// Looks up where a URL redirects to without following the redirect.
#[async_trait]
pub trait RedirectResolver: Send + Sync {
    async fn resolve_location(
        &self,
        url: &str,
    ) -> anyhow::Result<String>;
}

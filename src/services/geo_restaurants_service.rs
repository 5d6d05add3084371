use std::sync::Arc;
use futures::{stream, StreamExt, TryStreamExt};
use tracing::error;
use crate::helpers::geo_math::{distance_km, format_distance, round_to_1_decimal};
use crate::models::place::{GeoPoint, RawPlaceDetails, RawPlaceSummary};
use crate::models::restaurant::{RestaurantDetails, RestaurantSummary};
use crate::repositories::{DetailsProvider, SearchProvider};
use crate::services::error::ExternalServiceFailure;
use crate::services::photo_service::PhotoService;

pub const NEARBY_FAILURE_MESSAGE: &str = "Internal error connecting to Google Places API. Please try again later.";
pub const DETAILS_FAILURE_MESSAGE: &str = "Failed to retrieve restaurant details. Please try again later.";
pub const MISSING_DESCRIPTION: &str = "The owner has not left a description";
pub const MAX_DETAIL_PHOTOS: usize = 3;

pub struct GeoRestaurantsService {
    search_provider: Arc<dyn SearchProvider>,
    details_provider: Arc<dyn DetailsProvider>,
    photo_service: Arc<PhotoService>,
    fanout_limit: usize,
}

impl GeoRestaurantsService {
    pub fn new(
        search_provider: Arc<dyn SearchProvider>,
        details_provider: Arc<dyn DetailsProvider>,
        photo_service: Arc<PhotoService>,
        fanout_limit: usize,
    ) -> Self {
        Self {
            search_provider,
            details_provider,
            photo_service,
            fanout_limit: fanout_limit.max(1),
        }
    }

    /// Restaurants around `origin`, in the order the provider ranked them.
    ///
    /// A failed photo lookup for any single restaurant fails the whole list.
    pub async fn get_nearby_restaurants(
        &self,
        origin: GeoPoint,
        radius_meters: u32,
    ) -> Result<Vec<RestaurantSummary>, ExternalServiceFailure> {
        self.collect_nearby_restaurants(origin, radius_meters)
            .await
            .map_err(|e| {
                error!(
                    lat = origin.lat,
                    lng = origin.lng,
                    radius_meters,
                    "Failed to fetch data from Google Places API: {:#}", e
                );
                ExternalServiceFailure::new(NEARBY_FAILURE_MESSAGE)
            })
    }

    pub async fn get_restaurant_details(
        &self,
        place_id: &str,
        origin: GeoPoint,
    ) -> Result<RestaurantDetails, ExternalServiceFailure> {
        self.collect_restaurant_details(place_id, origin)
            .await
            .map_err(|e| {
                error!(
                    place_id,
                    lat = origin.lat,
                    lng = origin.lng,
                    "Failed to fetch restaurant details: {:#}", e
                );
                ExternalServiceFailure::new(DETAILS_FAILURE_MESSAGE)
            })
    }

    async fn collect_nearby_restaurants(
        &self,
        origin: GeoPoint,
        radius_meters: u32,
    ) -> anyhow::Result<Vec<RestaurantSummary>> {
        let places = self.search_provider
            .find_nearby(origin, radius_meters)
            .await?;

        stream::iter(places)
            .map(|place| self.map_to_restaurant_summary(place, origin))
            .buffered(self.fanout_limit)
            .try_collect()
            .await
    }

    async fn collect_restaurant_details(
        &self,
        place_id: &str,
        origin: GeoPoint,
    ) -> anyhow::Result<RestaurantDetails> {
        let details = self.details_provider
            .get_details(place_id)
            .await?;

        let photo_references: Vec<String> = details.photo_references
            .iter()
            .take(MAX_DETAIL_PHOTOS)
            .cloned()
            .collect();
        let photo_urls = self.photo_service
            .get_photo_urls(&photo_references)
            .await?;
        let distance = distance_km(origin, details.location);

        Ok(build_restaurant_details(details, distance, photo_urls))
    }

    async fn map_to_restaurant_summary(
        &self,
        place: RawPlaceSummary,
        origin: GeoPoint,
    ) -> anyhow::Result<RestaurantSummary> {
        let photo_url = match place.photo_references.first() {
            Some(reference) => Some(self.photo_service.get_photo_url(reference).await?),
            None => None,
        };
        let distance = distance_km(origin, place.location);

        Ok(RestaurantSummary {
            place_id: place.place_id,
            name: place.name,
            rating: round_to_1_decimal(place.rating),
            description: place.vicinity,
            distance_label: format_distance(distance),
            photo_url,
        })
    }
}

fn build_restaurant_details(
    details: RawPlaceDetails,
    distance: f64,
    photo_urls: Vec<String>,
) -> RestaurantDetails {
    RestaurantDetails {
        name: details.name,
        rating: details.rating,
        description: details.editorial_summary
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        address: details.formatted_address,
        website: details.website,
        distance_label: format_distance(distance),
        opening_hours: details.opening_hours,
        photo_urls,
    }
}

use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{OriginalUri, Path, Query};
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::controller::AppState;
use crate::models::api_error::ApiError;
use crate::models::place::GeoPoint;
use crate::services::geo_restaurants_service::GeoRestaurantsService;

pub const INVALID_PARAMETERS: &str = "Invalid parameters";
pub const MAX_RADIUS_METERS: u32 = 50_000;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(get_nearby_restaurants))
        .route("/:id", get(get_restaurant_details))
        .route_layer(Extension(app_state.restaurants_service))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NearbyRestaurantsQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
}

impl NearbyRestaurantsQuery {
    fn validate(&self) -> Result<GeoPoint, &'static str> {
        let origin = validate_coordinates(self.lat, self.lng)?;
        if !(1..=MAX_RADIUS_METERS).contains(&self.radius) {
            return Err("Radius must be between 1 and 50000 meters");
        }
        Ok(origin)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RestaurantDetailsQuery {
    pub lat: f64,
    pub lng: f64,
}

fn validate_coordinates(
    lat: f64,
    lng: f64,
) -> Result<GeoPoint, &'static str> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(GeoPoint::new(lat, lng))
}

fn bad_request(
    reason: &str,
    path: &str,
) -> Response {
    warn!("Rejected request to {}: {}", path, reason);
    ApiError::new(reason, path).with_status(StatusCode::BAD_REQUEST)
}

pub async fn get_nearby_restaurants(
    Extension(restaurants_service): Extension<Arc<GeoRestaurantsService>>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<NearbyRestaurantsQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return bad_request(INVALID_PARAMETERS, uri.path());
    };
    let origin = match query.validate() {
        Ok(origin) => origin,
        Err(reason) => return bad_request(reason, uri.path()),
    };

    let nearby_restaurants_res = restaurants_service
        .get_nearby_restaurants(origin, query.radius)
        .await;

    return match nearby_restaurants_res {
        Ok(restaurants) => {
            (StatusCode::OK, Json(restaurants)).into_response()
        }
        Err(e) => {
            ApiError::new(e.message(), uri.path()).with_status(StatusCode::NOT_FOUND)
        }
    };
}

pub async fn get_restaurant_details(
    Extension(restaurants_service): Extension<Arc<GeoRestaurantsService>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    query: Result<Query<RestaurantDetailsQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return bad_request(INVALID_PARAMETERS, uri.path());
    };
    let origin = match validate_coordinates(query.lat, query.lng) {
        Ok(origin) => origin,
        Err(reason) => return bad_request(reason, uri.path()),
    };
    if id.trim().is_empty() {
        return bad_request("Restaurant id must not be blank", uri.path());
    }

    let restaurant_details_res = restaurants_service
        .get_restaurant_details(&id, origin)
        .await;

    return match restaurant_details_res {
        Ok(restaurant) => {
            (StatusCode::OK, Json(restaurant)).into_response()
        }
        Err(e) => {
            ApiError::new(e.message(), uri.path()).with_status(StatusCode::NOT_FOUND)
        }
    };
}

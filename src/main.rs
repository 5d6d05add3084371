use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::google_places_repo::GooglePlacesRepo;
use crate::repositories::photo_redirect_repo::PhotoRedirectRepo;
use crate::services::geo_restaurants_service::GeoRestaurantsService;
use crate::services::photo_service::PhotoService;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod services;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!(
        "Starting geo restaurants backend in {} environment, fan-out limit {}",
        config.environment,
        config.fanout_limit
    );

    let places_repo = Arc::new(GooglePlacesRepo::new(
        &config.google_places_url,
        &config.google_api_key,
        config.http_timeout(),
    )?);
    let photo_service = Arc::new(PhotoService::new(
        Arc::new(PhotoRedirectRepo::new(config.http_timeout())?),
        &config.photo_url(),
        &config.google_api_key,
        config.fanout_limit,
    ));
    let restaurants_service = Arc::new(GeoRestaurantsService::new(
        places_repo.clone(),
        places_repo,
        photo_service,
        config.fanout_limit,
    ));

    controller::serve(AppState { restaurants_service }, &config).await
}

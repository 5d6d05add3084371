//! Fakes and helpers shared by the unit tests.

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use anyhow::anyhow;
use async_trait::async_trait;
use axum::Router;
use crate::models::place::{GeoPoint, RawPlaceDetails, RawPlaceSummary};
use crate::repositories::{DetailsProvider, RedirectResolver, SearchProvider};
use crate::services::geo_restaurants_service::GeoRestaurantsService;
use crate::services::photo_service::PhotoService;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_PHOTO_URL: &str = "https://places.test/photo";

/// Serves `router` on an ephemeral loopback port and returns its base url.
pub async fn spawn_stub_server(router: Router) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    tokio::spawn(server);

    format!("http://{}", addr)
}

pub fn summary(place_id: &str, location: GeoPoint, photo_references: &[&str]) -> RawPlaceSummary {
    RawPlaceSummary {
        place_id: place_id.to_string(),
        name: format!("Restaurant {}", place_id),
        rating: 4.0,
        vicinity: format!("{} street", place_id),
        location,
        photo_references: photo_references.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn details(location: GeoPoint, photo_references: Vec<String>) -> RawPlaceDetails {
    RawPlaceDetails {
        name: "Pasta Place".to_string(),
        rating: 4.6,
        editorial_summary: Some("Hand-made pasta".to_string()),
        formatted_address: "1 Main St".to_string(),
        website: Some("https://pasta.example/".to_string()),
        opening_hours: None,
        location,
        photo_references,
    }
}

#[derive(Default)]
pub struct FakePlaces {
    pub nearby: Option<Vec<RawPlaceSummary>>,
    pub details: Option<RawPlaceDetails>,
    pub requested_ids: Mutex<Vec<String>>,
}

impl FakePlaces {
    pub fn with_nearby(nearby: Vec<RawPlaceSummary>) -> Self {
        Self { nearby: Some(nearby), ..Self::default() }
    }

    pub fn with_details(details: RawPlaceDetails) -> Self {
        Self { details: Some(details), ..Self::default() }
    }

    /// Every lookup fails.
    pub fn failing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SearchProvider for FakePlaces {
    async fn find_nearby(
        &self,
        _origin: GeoPoint,
        _radius_meters: u32,
    ) -> anyhow::Result<Vec<RawPlaceSummary>> {
        self.nearby
            .clone()
            .ok_or_else(|| anyhow!("OVER_QUERY_LIMIT: quota exhausted"))
    }
}

#[async_trait]
impl DetailsProvider for FakePlaces {
    async fn get_details(
        &self,
        place_id: &str,
    ) -> anyhow::Result<RawPlaceDetails> {
        self.requested_ids.lock().unwrap().push(place_id.to_string());
        self.details
            .clone()
            .ok_or_else(|| anyhow!("NOT_FOUND: unknown place {}", place_id))
    }
}

/// Resolves `<base>?...photo_reference=<ref>...` to `https://img.test/<ref>.jpg`,
/// optionally delaying or failing per reference.
#[derive(Default)]
pub struct FakeRedirects {
    pub delays_ms: HashMap<String, u64>,
    pub failing: Vec<String>,
    pub requested_urls: Mutex<Vec<String>>,
}

impl FakeRedirects {
    pub fn with_delays(delays_ms: &[(&str, u64)]) -> Self {
        Self {
            delays_ms: delays_ms.iter().map(|(r, d)| (r.to_string(), *d)).collect(),
            ..Self::default()
        }
    }

    pub fn failing_for(references: &[&str]) -> Self {
        Self {
            failing: references.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested_urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RedirectResolver for FakeRedirects {
    async fn resolve_location(
        &self,
        url: &str,
    ) -> anyhow::Result<String> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        let parsed = reqwest::Url::parse(url)?;
        let reference = parsed
            .query_pairs()
            .find(|(key, _)| key == "photo_reference")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| anyhow!("missing photo_reference"))?;

        if let Some(delay) = self.delays_ms.get(&reference) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        if self.failing.contains(&reference) {
            return Err(anyhow!("no Location header for {}", reference));
        }

        Ok(format!("https://img.test/{}.jpg", reference))
    }
}

pub fn photo_service(redirects: Arc<FakeRedirects>) -> Arc<PhotoService> {
    Arc::new(PhotoService::new(redirects, TEST_PHOTO_URL, TEST_API_KEY, 4))
}

pub fn restaurants_service(
    places: Arc<FakePlaces>,
    redirects: Arc<FakeRedirects>,
) -> GeoRestaurantsService {
    GeoRestaurantsService::new(
        places.clone(),
        places,
        photo_service(redirects),
        4,
    )
}

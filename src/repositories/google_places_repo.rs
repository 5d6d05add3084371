use std::time::Duration;
use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::place::{GeoPoint, RawPlaceDetails, RawPlaceSummary};
use crate::repositories::{DetailsProvider, SearchProvider};

const RESTAURANT_PLACE_TYPE: &str = "restaurant";
const DETAILS_FIELDS: &str = "name,rating,editorial_summary,formatted_address,website,opening_hours,geometry,photos";

pub struct GooglePlacesRepo {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesRepo {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Google Places http client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn fetch<Q: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> anyhow::Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", endpoint))?
            .error_for_status()
            .with_context(|| format!("{} responded with an error status", endpoint))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode {} response", endpoint))
    }
}

#[async_trait]
impl SearchProvider for GooglePlacesRepo {
    async fn find_nearby(
        &self,
        origin: GeoPoint,
        radius_meters: u32,
    ) -> anyhow::Result<Vec<RawPlaceSummary>> {
        let params = NearbySearchParams {
            location: format!("{},{}", origin.lat, origin.lng),
            radius: radius_meters.to_string(),
            r#type: RESTAURANT_PLACE_TYPE,
            key: &self.api_key,
        };
        let response: NearbySearchResponse = self
            .fetch("nearbysearch/json", &params)
            .await?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            status => bail!(provider_status_error(status, response.error_message)),
        }

        Ok(response.results
            .into_iter()
            .map(parse_search_result_into_summary)
            .collect())
    }
}

#[async_trait]
impl DetailsProvider for GooglePlacesRepo {
    async fn get_details(
        &self,
        place_id: &str,
    ) -> anyhow::Result<RawPlaceDetails> {
        let params = DetailsParams {
            place_id,
            fields: DETAILS_FIELDS,
            key: &self.api_key,
        };
        let response: DetailsResponse = self
            .fetch("details/json", &params)
            .await?;

        if response.status != "OK" {
            bail!(provider_status_error(&response.status, response.error_message));
        }

        let result = response.result
            .ok_or_else(|| anyhow!("Details response for {} carried no result", place_id))?;
        Ok(parse_details_result(result))
    }
}

fn provider_status_error(
    status: &str,
    error_message: Option<String>,
) -> String {
    match error_message {
        Some(message) => format!("Google Places responded with {}: {}", status, message),
        None => format!("Google Places responded with {}", status),
    }
}

#[derive(Serialize, Debug)]
struct NearbySearchParams<'a> {
    location: String,
    radius: String,
    r#type: &'a str,
    key: &'a str,
}

#[derive(Serialize, Debug)]
struct DetailsParams<'a> {
    place_id: &'a str,
    fields: &'a str,
    key: &'a str,
}

#[derive(Deserialize, Debug)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
    status: String,
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct DetailsResponse {
    result: Option<DetailsResult>,
    status: String,
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SearchResult {
    place_id: String,
    name: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    vicinity: String,
    geometry: Geometry,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Deserialize, Debug)]
struct DetailsResult {
    name: String,
    #[serde(default)]
    rating: f64,
    editorial_summary: Option<EditorialSummary>,
    #[serde(default)]
    formatted_address: String,
    website: Option<String>,
    opening_hours: Option<Value>,
    geometry: Geometry,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Deserialize, Debug)]
struct Geometry {
    location: GeoPoint,
}

#[derive(Deserialize, Debug)]
struct Photo {
    photo_reference: String,
}

#[derive(Deserialize, Debug)]
struct EditorialSummary {
    overview: Option<String>,
}

fn parse_search_result_into_summary(
    result: SearchResult,
) -> RawPlaceSummary {
    RawPlaceSummary {
        place_id: result.place_id,
        name: result.name,
        rating: result.rating,
        vicinity: result.vicinity,
        location: result.geometry.location,
        photo_references: result.photos
            .into_iter()
            .map(|photo| photo.photo_reference)
            .collect(),
    }
}

fn parse_details_result(
    result: DetailsResult,
) -> RawPlaceDetails {
    RawPlaceDetails {
        name: result.name,
        rating: result.rating,
        editorial_summary: result.editorial_summary.and_then(|summary| summary.overview),
        formatted_address: result.formatted_address,
        website: result.website,
        opening_hours: result.opening_hours,
        location: result.geometry.location,
        photo_references: result.photos
            .into_iter()
            .map(|photo| photo.photo_reference)
            .collect(),
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single nearby-search hit as handed back by the places provider.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPlaceSummary {
    pub place_id: String,
    pub name: String,
    pub rating: f64,
    pub vicinity: String,
    pub location: GeoPoint,
    pub photo_references: Vec<String>,
}

/// Full place record from the provider's details lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPlaceDetails {
    pub name: String,
    pub rating: f64,
    pub editorial_summary: Option<String>,
    pub formatted_address: String,
    pub website: Option<String>,
    /// Passed through to callers untouched.
    pub opening_hours: Option<Value>,
    pub location: GeoPoint,
    pub photo_references: Vec<String>,
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RestaurantSummary {
    pub place_id: String,
    pub name: String,
    pub rating: f64,
    pub description: String,
    #[serde(rename = "distance")]
    pub distance_label: String,
    #[serde(rename = "photo")]
    pub photo_url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RestaurantDetails {
    pub name: String,
    pub rating: f64,
    pub description: String,
    pub address: String,
    pub website: Option<String>,
    #[serde(rename = "distance")]
    pub distance_label: String,
    pub opening_hours: Option<Value>,
    #[serde(rename = "photos")]
    pub photo_urls: Vec<String>,
}

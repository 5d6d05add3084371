pub mod error;
pub mod geo_restaurants_service;
pub mod photo_service;

use crate::models::place::GeoPoint;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Coordinates are taken in degrees.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Renders a distance as whole meters below one kilometer, otherwise as
/// kilometers with a single decimal digit.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        let meters = round_half_up(km * 1000.0) as i64;
        format!("{}м", meters)
    } else {
        format!("{:.1}км", round_to_1_decimal(km))
    }
}

pub fn round_to_1_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

// f64::round breaks ties away from zero, which disagrees with half-up on negatives
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine great-circle distance between two points.
///
/// # Arguments
/// * `from` - First point in degrees
/// * `to` - Second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let from_lat_rad = from.lat.to_radians();
    let to_lat_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat_rad.cos() * to_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

//! Great-circle distance and wind-adjusted traversal cost.
//!
//! Distances use the haversine formula on a spherical Earth. The traversal
//! cost adds a flat wind penalty to every edge: wind is treated as a scalar
//! that hampers every response equally, not as a vector with a heading.
//!
//! Inputs are not validated. Callers are expected to pass finite WGS84
//! coordinates and a non-negative wind speed; anything else propagates
//! through the arithmetic as-is.

use firegrid_types::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Edge cost added per mile-per-hour of wind.
pub const WIND_COST_PER_MPH: f64 = 0.1;

/// Statute miles per kilometer.
pub const MILES_PER_KM: f64 = 0.621_371;

/// Haversine distance between two coordinates, in kilometers.
///
/// Returns `0.0` for identical points and is symmetric in its arguments.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let half_d_lat = (b.lat - a.lat).to_radians() / 2.0;
    let half_d_lng = (b.lng - a.lng).to_radians() / 2.0;
    let cos_product = a.lat.to_radians().cos() * b.lat.to_radians().cos();

    // Rounding can push h just past 1 for near-antipodal points.
    let h = cos_product
        .mul_add(half_d_lng.sin().powi(2), half_d_lat.sin().powi(2))
        .clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Wind-adjusted cost of sending a resource to a zone.
///
/// Defined as `distance_km(resource, zone) + wind_speed * 0.1`. Always
/// non-negative for valid coordinates and `wind_speed >= 0`.
pub fn edge_weight(resource_location: Coordinate, zone_location: Coordinate, wind_speed: f64) -> f64 {
    edge_weight_with(resource_location, zone_location, wind_speed, WIND_COST_PER_MPH)
}

/// [`edge_weight`] with an explicit per-mph wind coefficient.
pub fn edge_weight_with(
    resource_location: Coordinate,
    zone_location: Coordinate,
    wind_speed: f64,
    wind_cost_per_mph: f64,
) -> f64 {
    wind_speed.mul_add(wind_cost_per_mph, distance_km(resource_location, zone_location))
}

/// Convert kilometers to statute miles.
pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

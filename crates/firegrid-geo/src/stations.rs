//! Radius search over the fire station registry.
//!
//! Used to show the dispatcher which fixed stations sit near each active
//! zone. Distances are reported in statute miles because that is what the
//! station registry and the dashboard use.

use firegrid_types::{Coordinate, FireStation};
use serde::Serialize;
use tracing::debug;

use crate::distance::{distance_km, km_to_miles};
use crate::error::GeoError;

/// A station found within the search radius, with its distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyStation {
    /// The matching station.
    pub station: FireStation,
    /// Great-circle distance from the search point, in miles.
    pub distance_miles: f64,
}

/// Find all stations within `radius_miles` of `location`, closest first.
///
/// Stations at exactly the radius are included. Stations at equal
/// distance keep their registry order.
///
/// # Errors
///
/// Returns [`GeoError::InvalidRadius`] if the radius is negative or not
/// finite.
pub fn find_nearby_stations(
    location: Coordinate,
    radius_miles: f64,
    stations: &[FireStation],
) -> Result<Vec<NearbyStation>, GeoError> {
    if !radius_miles.is_finite() || radius_miles < 0.0 {
        return Err(GeoError::InvalidRadius(radius_miles));
    }

    // NaN distances (from garbage coordinates) fail the `<=` test and drop out.
    let mut nearby: Vec<NearbyStation> = stations
        .iter()
        .filter_map(|station| {
            let distance_miles = km_to_miles(distance_km(location, station.coordinates));
            (distance_miles <= radius_miles).then(|| NearbyStation {
                station: station.clone(),
                distance_miles,
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));

    debug!(
        radius_miles,
        searched = stations.len(),
        found = nearby.len(),
        "Nearby station search"
    );
    Ok(nearby)
}

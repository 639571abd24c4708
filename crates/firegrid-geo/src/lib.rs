//! Geography for the Firegrid incident dashboard.
//!
//! # Modules
//!
//! - [`distance`] -- Haversine distance and the wind-adjusted edge weight used
//!   by the allocation graph.
//! - [`error`] -- Error types for geographic queries.
//! - [`stations`] -- Radius search over the fire station registry.

pub mod distance;
pub mod error;
pub mod stations;

// Re-export primary items at crate root.
pub use distance::{
    EARTH_RADIUS_KM, MILES_PER_KM, WIND_COST_PER_MPH, distance_km, edge_weight, edge_weight_with,
    km_to_miles,
};
pub use error::GeoError;
pub use stations::{NearbyStation, find_nearby_stations};

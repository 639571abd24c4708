//! Core entity structs for the Firegrid incident dashboard.
//!
//! These mirror the documents that the incident API and weather feed hand
//! to the dashboard. The allocation core reads them but never mutates the
//! caller's copies.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ResourceKind, ResourceStatus};
use crate::ids::{ResourceId, StationId, ZoneId};

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinate {
    /// Latitude in degrees, expected in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, expected in `[-180, 180]`.
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    ///
    /// The allocation core never calls this; input sanitation belongs to
    /// whoever builds the zone and resource lists.
    pub fn is_valid_wgs84(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Daily weather observation for a fire zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherSnapshot {
    /// When the observation was taken, if the feed reported it.
    #[serde(default)]
    pub observed_at: Option<DateTime<Utc>>,
    /// Maximum temperature in degrees Fahrenheit.
    pub max_temp: f64,
    /// Average wind speed in miles per hour.
    pub avg_wind_speed: f64,
    /// Precipitation over the lag window, in inches.
    pub lagged_precipitation: f64,
    /// Wind-to-temperature ratio reported by the feed.
    pub wind_temp_ratio: f64,
}

// ---------------------------------------------------------------------------
// Fire zone
// ---------------------------------------------------------------------------

/// A geographic fire-risk area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FireZone {
    /// Unique zone identifier.
    pub id: ZoneId,
    /// Display name.
    pub name: String,
    /// Representative point of the zone.
    pub coordinates: Coordinate,
    /// Latest weather snapshot, absent when the feed has no data.
    #[serde(default)]
    pub current_weather: Option<WeatherSnapshot>,
    /// Derived urgency score. Not authoritative until recomputed.
    #[serde(default)]
    pub resource_need_score: Option<f64>,
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// A deployable response asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    /// Asset category.
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Display name (e.g. "Engine 101").
    pub name: String,
    /// Dispatch status. Informational only for allocation.
    #[serde(default)]
    pub status: ResourceStatus,
    /// Last reported position.
    pub current_location: Coordinate,
    /// Free-form capability tags such as `water-pump` or `rescue`.
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
    /// Zone the resource is currently committed to, if any.
    #[serde(default)]
    pub assigned_zone: Option<ZoneId>,
}

// ---------------------------------------------------------------------------
// Fire station
// ---------------------------------------------------------------------------

/// A fixed fire station from the station registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FireStation {
    /// Unique station identifier.
    pub id: StationId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// County.
    pub county: String,
    /// Station location.
    pub coordinates: Coordinate,
    /// Station number as printed on the apparatus.
    pub station_number: String,
    /// Registry status (e.g. `active`).
    pub status: String,
    /// Apparatus housed at the station.
    #[serde(default)]
    pub resources: Vec<String>,
}

// ---------------------------------------------------------------------------
// Assignment map
// ---------------------------------------------------------------------------

/// Result of one allocation run: zone id to the resources it claimed.
///
/// Each sequence is in selection order (closest first). A resource id
/// appears in at most one sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AssignmentMap(pub BTreeMap<ZoneId, Vec<ResourceId>>);

impl AssignmentMap {
    /// Create a map with an empty sequence for every given zone.
    pub fn with_zones(zones: impl IntoIterator<Item = ZoneId>) -> Self {
        Self(zones.into_iter().map(|zone| (zone, Vec::new())).collect())
    }

    /// Append a resource to a zone's sequence, seeding the zone if needed.
    pub fn push(&mut self, zone: &ZoneId, resource: ResourceId) {
        self.0.entry(zone.clone()).or_default().push(resource);
    }

    /// Resources assigned to a zone, or `None` if the zone is not in the map.
    pub fn get(&self, zone: &ZoneId) -> Option<&[ResourceId]> {
        self.0.get(zone).map(Vec::as_slice)
    }

    /// The zone a resource was assigned to, if any.
    pub fn zone_of(&self, resource: &ResourceId) -> Option<&ZoneId> {
        self.0
            .iter()
            .find(|(_, assigned)| assigned.contains(resource))
            .map(|(zone, _)| zone)
    }

    /// Number of zones present in the map (assigned or not).
    pub fn zone_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of resource assignments across all zones.
    pub fn assigned_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Iterate over `(zone, resources)` pairs in zone id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, &[ResourceId])> {
        self.0.iter().map(|(zone, assigned)| (zone, assigned.as_slice()))
    }
}

//! End-to-end dispatch planning for one dashboard refresh.
//!
//! Ties the pieces together the way the dashboard uses them. Weather
//! snapshots become priority scores, zones and resources become an
//! allocation graph, and the optimizer turns both into an assignment map.
//! The plan also lists the resources left idle and the fixed stations near
//! each zone.

use std::collections::{BTreeMap, BTreeSet};

use firegrid_geo::{GeoError, NearbyStation, find_nearby_stations};
use firegrid_types::{AssignmentMap, FireStation, FireZone, Resource, ResourceId, ZoneId};
use serde::Serialize;
use tracing::info;

use crate::config::DashboardConfig;
use crate::graph::build_graph_with;
use crate::optimizer::assign_with;
use crate::scoring::{priority_scores, with_need_score};

/// Errors that can occur while planning a dispatch.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Nearby-station lookup rejected its parameters.
    #[error("station lookup failed: {source}")]
    Stations {
        /// The underlying geo error.
        #[from]
        source: GeoError,
    },
}

/// Everything the dashboard renders after one allocation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchPlan {
    /// Wind speed the graph was built with, in mph.
    pub wind_speed_mph: f64,
    /// Need score for every zone that had weather.
    pub priority_scores: BTreeMap<ZoneId, f64>,
    /// Copies of the input zones with `resource_need_score` filled in.
    pub scored_zones: Vec<FireZone>,
    /// Zone to assigned resources, closest first.
    pub assignments: AssignmentMap,
    /// Resources no zone claimed, in input order.
    pub unassigned_resources: Vec<ResourceId>,
    /// Stations within the configured radius of each zone, closest first.
    pub nearby_stations: BTreeMap<ZoneId, Vec<NearbyStation>>,
}

/// Score, build, assign, and look up stations for one refresh.
///
/// # Errors
///
/// Returns [`PlanError::Stations`] if the configured station search radius
/// is invalid.
pub fn plan_dispatch(
    zones: &[FireZone],
    resources: &[Resource],
    stations: &[FireStation],
    wind_speed_mph: f64,
    config: &DashboardConfig,
) -> Result<DispatchPlan, PlanError> {
    let scores = priority_scores(zones);
    let graph = build_graph_with(zones, resources, wind_speed_mph, &config.optimizer);
    let assignments = assign_with(&graph, &scores, &config.optimizer);

    let claimed: BTreeSet<&ResourceId> = assignments
        .iter()
        .flat_map(|(_, assigned)| assigned.iter())
        .collect();
    let unassigned_resources: Vec<ResourceId> = resources
        .iter()
        .filter(|resource| !claimed.contains(&resource.id))
        .map(|resource| resource.id.clone())
        .collect();

    let mut nearby_stations = BTreeMap::new();
    for zone in zones {
        let found = find_nearby_stations(
            zone.coordinates,
            config.stations.search_radius_miles,
            stations,
        )?;
        nearby_stations.insert(zone.id.clone(), found);
    }

    info!(
        zones = zones.len(),
        scored = scores.len(),
        resources = resources.len(),
        unassigned = unassigned_resources.len(),
        "Dispatch plan ready"
    );

    Ok(DispatchPlan {
        wind_speed_mph,
        priority_scores: scores,
        scored_zones: zones.iter().map(with_need_score).collect(),
        assignments,
        unassigned_resources,
        nearby_stations,
    })
}

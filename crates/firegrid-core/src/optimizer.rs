//! Greedy priority-ordered assignment of resources to fire zones.
//!
//! # Algorithm
//!
//! 1. Every zone in the graph starts with an empty assignment.
//! 2. `max_priority` is the largest score in the priority map. If it is not
//!    strictly positive (or the map is empty) every quota is zero and the
//!    run returns the empty assignment.
//! 3. Zones are visited in descending priority. Ties keep graph order. Zones
//!    missing from the priority map count as NaN and go last.
//! 4. For each zone, the resources not yet claimed in this run are ranked by
//!    edge weight to the zone, closest first. Ties keep graph order, and a
//!    missing edge counts as `+inf`. The zone then claims the first
//!    `quota` of them, where
//!    `quota = ceil(priority / max_priority * min(cap, available))`,
//!    clamped to `[0, min(cap, available)]`.
//!
//! A resource is claimed by at most one zone per run. There is no
//! backtracking, so the result is a fast heuristic rather than an optimal
//! matching. Resource status is not consulted; callers that want to skip
//! deployed or out-of-service units must filter them before building the
//! graph.

use std::collections::{BTreeMap, BTreeSet};

use firegrid_types::{AssignmentMap, FireZone, Resource, ResourceId, ZoneId};
use tracing::{debug, info};

use crate::config::OptimizerConfig;
use crate::graph::AllocationGraph;
use crate::ordering::descending_nan_last;
use crate::queue::MinPriorityQueue;

/// Assign resources to zones using the default per-zone cap of 3.
pub fn assign(graph: &AllocationGraph<'_>, priority_scores: &BTreeMap<ZoneId, f64>) -> AssignmentMap {
    assign_with(graph, priority_scores, &OptimizerConfig::default())
}

/// Assign resources to zones with explicit optimizer settings.
pub fn assign_with(
    graph: &AllocationGraph<'_>,
    priority_scores: &BTreeMap<ZoneId, f64>,
    config: &OptimizerConfig,
) -> AssignmentMap {
    let mut assignments = AssignmentMap::with_zones(graph.zones().map(|zone| zone.id.clone()));

    // f64::max skips NaN, so this is NaN-free; an empty map stays at -inf.
    let max_priority = priority_scores
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if max_priority <= 0.0 {
        debug!(max_priority, "No positive priority, nothing to assign");
        return assignments;
    }

    let mut ordered: Vec<(&FireZone, f64)> = graph
        .zones()
        .map(|zone| {
            let priority = priority_scores.get(&zone.id).copied().unwrap_or(f64::NAN);
            (zone, priority)
        })
        .collect();
    ordered.sort_by(|a, b| descending_nan_last(a.1, b.1));

    let resources: Vec<&Resource> = graph.resources().collect();
    let mut claimed: BTreeSet<&ResourceId> = BTreeSet::new();

    for (zone, priority) in ordered {
        let available: Vec<&Resource> = resources
            .iter()
            .copied()
            .filter(|resource| !claimed.contains(&resource.id))
            .collect();
        if available.is_empty() {
            debug!(zone = %zone.id, "No resources left");
            continue;
        }

        let quota = zone_quota(priority, max_priority, available.len(), config.max_resources_per_zone);

        let mut closest: MinPriorityQueue<&Resource> = available
            .iter()
            .map(|resource| {
                let weight = graph
                    .edge_weight(&resource.id, &zone.id)
                    .unwrap_or(f64::INFINITY);
                (*resource, weight)
            })
            .collect();

        for _ in 0..quota {
            let Some((weight, resource)) = closest.dequeue() else {
                break;
            };
            claimed.insert(&resource.id);
            assignments.push(&zone.id, resource.id.clone());
            debug!(zone = %zone.id, resource = %resource.id, weight, "Resource assigned");
        }

        debug!(
            zone = %zone.id,
            priority,
            available = available.len(),
            quota,
            "Zone processed"
        );
    }

    info!(
        zones = assignments.zone_count(),
        resources = resources.len(),
        assigned = assignments.assigned_count(),
        max_priority,
        "Allocation pass complete"
    );
    assignments
}

/// Number of resources a zone may claim in this pass.
///
/// Computes `ceil(priority / max_priority * min(cap, available))` and
/// clamps it into `[0, min(cap, available)]`. Returns 0 when `max_priority`
/// is not strictly positive or the ratio is NaN.
pub fn zone_quota(priority: f64, max_priority: f64, available: usize, cap: u8) -> usize {
    if max_priority.is_nan() || max_priority <= 0.0 {
        return 0;
    }
    let slots = u8::try_from(available).map_or(cap, |n| n.min(cap));
    let target = priority / max_priority * f64::from(slots);
    if target.is_nan() {
        return 0;
    }
    // Smallest whole count covering the target, i.e. a clamped ceil.
    let quota = (0..=slots)
        .find(|&count| f64::from(count) >= target)
        .unwrap_or(slots);
    usize::from(quota)
}

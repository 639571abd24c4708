//! Complete bipartite allocation graph between resources and fire zones.
//!
//! Every resource gets exactly one weighted edge to every zone, so the graph
//! holds `|resources| x |zones|` edges. Nodes borrow the caller's zones and
//! resources. The graph is built fresh for each allocation pass and dropped
//! afterwards.
//!
//! Node order is all zones in input order, then all resources in input order.
//! Edge order is resource-major: every edge for the first resource, then
//! every edge for the second, and so on.

use std::collections::BTreeMap;

use firegrid_geo::edge_weight_with;
use firegrid_types::{FireZone, Resource, ResourceId, ZoneId};
use tracing::debug;

use crate::config::OptimizerConfig;

/// A node in the allocation graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphNode<'a> {
    /// A fire zone demanding resources.
    Zone(&'a FireZone),
    /// A resource that can be sent to a zone.
    Resource(&'a Resource),
}

impl GraphNode<'_> {
    /// The underlying entity's identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Zone(zone) => zone.id.as_str(),
            Self::Resource(resource) => resource.id.as_str(),
        }
    }
}

/// A weighted resource-to-zone edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge<'a> {
    /// The resource end of the edge.
    pub from: &'a ResourceId,
    /// The zone end of the edge.
    pub to: &'a ZoneId,
    /// Wind-adjusted traversal cost.
    pub weight: f64,
}

/// Bipartite graph of zones and resources with per-pair weights.
#[derive(Debug, Clone)]
pub struct AllocationGraph<'a> {
    nodes: Vec<GraphNode<'a>>,
    edges: Vec<GraphEdge<'a>>,
    /// Zone to resource to weight. The first edge wins on duplicate ids.
    weights: BTreeMap<&'a ZoneId, BTreeMap<&'a ResourceId, f64>>,
}

impl<'a> AllocationGraph<'a> {
    /// All nodes: zones first, then resources, each in input order.
    pub fn nodes(&self) -> &[GraphNode<'a>] {
        &self.nodes
    }

    /// All edges in construction order.
    pub fn edges(&self) -> &[GraphEdge<'a>] {
        &self.edges
    }

    /// Zone nodes in input order.
    pub fn zones(&self) -> impl Iterator<Item = &'a FireZone> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            GraphNode::Zone(zone) => Some(*zone),
            GraphNode::Resource(_) => None,
        })
    }

    /// Resource nodes in input order.
    pub fn resources(&self) -> impl Iterator<Item = &'a Resource> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            GraphNode::Resource(resource) => Some(*resource),
            GraphNode::Zone(_) => None,
        })
    }

    /// Weight of the edge from `resource` to `zone`, if one exists.
    pub fn edge_weight(&self, resource: &ResourceId, zone: &ZoneId) -> Option<f64> {
        self.weights
            .get(zone)
            .and_then(|row| row.get(resource))
            .copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build the allocation graph using the default wind coefficient.
pub fn build_graph<'a>(
    zones: &'a [FireZone],
    resources: &'a [Resource],
    wind_speed: f64,
) -> AllocationGraph<'a> {
    build_graph_with(zones, resources, wind_speed, &OptimizerConfig::default())
}

/// Build the allocation graph with explicit optimizer settings.
///
/// Empty `zones` or `resources` give a graph with no edges. Inputs are not
/// mutated.
pub fn build_graph_with<'a>(
    zones: &'a [FireZone],
    resources: &'a [Resource],
    wind_speed: f64,
    config: &OptimizerConfig,
) -> AllocationGraph<'a> {
    let nodes: Vec<GraphNode<'a>> = zones
        .iter()
        .map(GraphNode::Zone)
        .chain(resources.iter().map(GraphNode::Resource))
        .collect();

    let mut edges = Vec::with_capacity(resources.len().saturating_mul(zones.len()));
    let mut weights: BTreeMap<&ZoneId, BTreeMap<&ResourceId, f64>> = BTreeMap::new();

    for resource in resources {
        for zone in zones {
            let weight = edge_weight_with(
                resource.current_location,
                zone.coordinates,
                wind_speed,
                config.wind_cost_per_mph,
            );
            edges.push(GraphEdge {
                from: &resource.id,
                to: &zone.id,
                weight,
            });
            weights
                .entry(&zone.id)
                .or_default()
                .entry(&resource.id)
                .or_insert(weight);
        }
    }

    debug!(
        zones = zones.len(),
        resources = resources.len(),
        edges = edges.len(),
        wind_speed,
        "Allocation graph built"
    );

    AllocationGraph {
        nodes,
        edges,
        weights,
    }
}

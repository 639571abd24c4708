//! Resource allocation core for the Firegrid incident dashboard.
//!
//! Turns fire zones, response resources, and weather into a zone-to-resource
//! assignment. Every operation is synchronous and pure. Nothing is shared
//! between calls, so concurrent callers need no coordination.
//!
//! # Modules
//!
//! - [`config`] -- Typed YAML configuration (optimizer, stations, logging).
//! - [`scoring`] -- Weather-derived urgency scores.
//! - [`graph`] -- Complete bipartite resource/zone graph with wind-adjusted
//!   edge weights.
//! - [`optimizer`] -- Greedy priority-ordered assignment.
//! - [`queue`] -- Stable min-priority queue used to rank candidates.
//! - [`ordering`] -- NaN-last float orderings shared by every sort.
//! - [`planner`] -- One-call pipeline producing a [`DispatchPlan`].

pub mod config;
pub mod graph;
pub mod optimizer;
pub mod ordering;
pub mod planner;
pub mod queue;
pub mod scoring;

// Re-export primary types at crate root.
pub use config::{ConfigError, DashboardConfig, OptimizerConfig};
pub use graph::{AllocationGraph, GraphEdge, GraphNode, build_graph, build_graph_with};
pub use optimizer::{assign, assign_with, zone_quota};
pub use planner::{DispatchPlan, PlanError, plan_dispatch};
pub use queue::MinPriorityQueue;
pub use scoring::{need_score, priority_scores, with_need_score};

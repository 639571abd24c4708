//! Enumeration types for the Firegrid incident dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Resource kinds
// ---------------------------------------------------------------------------

/// The category of a deployable response asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResourceKind {
    /// Fire engine or water tender.
    Truck,
    /// Hand crew or strike team.
    Crew,
    /// Rotary-wing aircraft for water drops, rescue, and surveillance.
    Helicopter,
    /// Non-vehicle equipment such as a mobile command unit.
    Equipment,
}

impl ResourceKind {
    /// Human-readable label shown on the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Crew => "Crew",
            Self::Helicopter => "Helicopter",
            Self::Equipment => "Equipment",
        }
    }
}

// ---------------------------------------------------------------------------
// Resource status
// ---------------------------------------------------------------------------

/// Operational status of a resource as reported by dispatch.
///
/// The allocation core treats this as informational only. A resource in
/// [`ResourceStatus::Maintenance`] is still a candidate unless the caller
/// filters it out beforehand.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ResourceStatus {
    /// Ready for assignment.
    #[default]
    Available,
    /// Currently committed to an incident.
    Deployed,
    /// Out of service.
    Maintenance,
}

impl ResourceStatus {
    /// Whether dispatch considers the resource ready for a new assignment.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

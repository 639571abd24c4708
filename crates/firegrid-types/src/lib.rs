//! Shared type definitions for the Firegrid incident dashboard.
//!
//! This crate is the single source of truth for the data contracts exchanged
//! between the allocation core and the dashboard. Types defined here flow
//! downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for zone, resource, and station ids
//! - [`enums`] -- Resource kind and dispatch status
//! - [`structs`] -- Coordinates, weather, zones, resources, stations, and the
//!   assignment map produced by the optimizer

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ResourceKind, ResourceStatus};
pub use ids::{ResourceId, StationId, ZoneId};
pub use structs::{AssignmentMap, Coordinate, FireStation, FireZone, Resource, WeatherSnapshot};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::ZoneId::export_all();
        let _ = crate::ids::ResourceId::export_all();
        let _ = crate::ids::StationId::export_all();

        // Enums
        let _ = crate::enums::ResourceKind::export_all();
        let _ = crate::enums::ResourceStatus::export_all();

        // Structs
        let _ = crate::structs::Coordinate::export_all();
        let _ = crate::structs::WeatherSnapshot::export_all();
        let _ = crate::structs::FireZone::export_all();
        let _ = crate::structs::Resource::export_all();
        let _ = crate::structs::FireStation::export_all();
        let _ = crate::structs::AssignmentMap::export_all();
    }
}

//! Scenario files: the zones, resources, and stations for one planning run.
//!
//! A scenario stands in for the incident API and weather feed. It is read
//! from YAML and checked before anything reaches the allocation core, which
//! assumes sane coordinates, a non-negative wind speed, and unique ids.

use std::collections::BTreeSet;
use std::path::Path;

use firegrid_types::{Coordinate, FireStation, FireZone, Resource, ResourceId, ZoneId};
use serde::Deserialize;

/// Errors that can occur when loading or validating a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Failed to read the scenario file from disk.
    #[error("failed to read scenario file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse scenario YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A zone, resource, or station has a coordinate outside WGS84.
    #[error("{entity} {id} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate {
        /// Kind of entity (`zone`, `resource`, `station`).
        entity: &'static str,
        /// The entity's identifier.
        id: String,
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lng: f64,
    },

    /// Wind speed was negative or not finite.
    #[error("invalid wind speed: {0} mph")]
    InvalidWindSpeed(f64),

    /// Two zones share an identifier.
    #[error("duplicate zone id: {0}")]
    DuplicateZone(ZoneId),

    /// Two resources share an identifier.
    #[error("duplicate resource id: {0}")]
    DuplicateResource(ResourceId),
}

impl From<serde_yml::Error> for ScenarioError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Inputs for one planning run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Regional wind speed applied to every edge, in mph.
    pub wind_speed_mph: f64,
    /// Fire zones to cover.
    pub zones: Vec<FireZone>,
    /// Resources available for dispatch.
    pub resources: Vec<Resource>,
    /// Fixed stations for the nearby-station lookup.
    #[serde(default)]
    pub stations: Vec<FireStation>,
}

impl Scenario {
    /// Load and validate a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, or any
    /// error from [`Scenario::parse`].
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Yaml`] on malformed YAML, or a validation
    /// error from [`Scenario::validate`].
    pub fn parse(yaml: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_yml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check the preconditions the allocation core relies on.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: bad wind speed, bad coordinates,
    /// or a duplicate zone or resource id.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.wind_speed_mph.is_finite() || self.wind_speed_mph < 0.0 {
            return Err(ScenarioError::InvalidWindSpeed(self.wind_speed_mph));
        }

        let mut zone_ids = BTreeSet::new();
        for zone in &self.zones {
            check_coordinate("zone", zone.id.as_str(), zone.coordinates)?;
            if !zone_ids.insert(&zone.id) {
                return Err(ScenarioError::DuplicateZone(zone.id.clone()));
            }
        }

        let mut resource_ids = BTreeSet::new();
        for resource in &self.resources {
            check_coordinate("resource", resource.id.as_str(), resource.current_location)?;
            if !resource_ids.insert(&resource.id) {
                return Err(ScenarioError::DuplicateResource(resource.id.clone()));
            }
        }

        for station in &self.stations {
            check_coordinate("station", station.id.as_str(), station.coordinates)?;
        }

        Ok(())
    }
}

fn check_coordinate(entity: &'static str, id: &str, at: Coordinate) -> Result<(), ScenarioError> {
    if at.is_valid_wgs84() {
        Ok(())
    } else {
        Err(ScenarioError::InvalidCoordinate {
            entity,
            id: id.to_owned(),
            lat: at.lat,
            lng: at.lng,
        })
    }
}

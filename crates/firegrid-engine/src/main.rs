//! Dispatch planner binary for the Firegrid incident dashboard.
//!
//! Loads configuration and a scenario, runs one allocation pass, and writes
//! the resulting plan as JSON to stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `firegrid-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing), `RUST_LOG` overriding the
//!    configured level
//! 3. Load and validate the scenario named in the config
//! 4. Score zones, build the allocation graph, and assign resources
//! 5. Log a per-zone summary
//! 6. Print the dispatch plan

mod error;
mod scenario;

use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::Path;

use firegrid_core::config::DashboardConfig;
use firegrid_core::planner::{DispatchPlan, plan_dispatch};
use firegrid_types::{Resource, ResourceId};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::scenario::Scenario;

/// Default configuration file, relative to the working directory.
const CONFIG_PATH: &str = "firegrid-config.yaml";

/// Application entry point for the dispatch planner.
///
/// # Errors
///
/// Returns an error if configuration, scenario loading, planning, or
/// output fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = Path::new(CONFIG_PATH);
    let config_found = config_path.exists();
    let config = load_config(config_path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("firegrid-engine starting");
    if config_found {
        info!(
            path = CONFIG_PATH,
            max_resources_per_zone = config.optimizer.max_resources_per_zone,
            wind_cost_per_mph = config.optimizer.wind_cost_per_mph,
            search_radius_miles = config.stations.search_radius_miles,
            "Configuration loaded"
        );
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Load the scenario.
    let scenario_path = Path::new(&config.scenario.path);
    let scenario = Scenario::from_file(scenario_path).map_err(EngineError::from)?;
    info!(
        path = %scenario_path.display(),
        zones = scenario.zones.len(),
        resources = scenario.resources.len(),
        stations = scenario.stations.len(),
        wind_speed_mph = scenario.wind_speed_mph,
        "Scenario loaded"
    );

    // 4. Plan.
    let plan = plan_dispatch(
        &scenario.zones,
        &scenario.resources,
        &scenario.stations,
        scenario.wind_speed_mph,
        &config,
    )
    .map_err(EngineError::from)?;

    // 5. Summarize.
    log_plan(&plan, &scenario.resources);

    // 6. Emit.
    write_plan(&plan)?;

    info!("firegrid-engine finished");
    Ok(())
}

/// Load the dashboard configuration, falling back to defaults when the
/// file does not exist.
fn load_config(path: &Path) -> Result<DashboardConfig, EngineError> {
    if path.exists() {
        Ok(DashboardConfig::from_file(path)?)
    } else {
        let mut config = DashboardConfig::default();
        config.scenario.apply_env_overrides();
        Ok(config)
    }
}

/// Log one line per zone plus the idle resources.
fn log_plan(plan: &DispatchPlan, resources: &[Resource]) {
    let kinds: BTreeMap<&ResourceId, &str> = resources
        .iter()
        .map(|resource| (&resource.id, resource.kind.label()))
        .collect();
    let describe = |id: &ResourceId| match kinds.get(id) {
        Some(kind) => format!("{id} ({kind})"),
        None => id.to_string(),
    };

    for (zone, assigned) in plan.assignments.iter() {
        let priority = plan.priority_scores.get(zone).copied();
        let stations = plan.nearby_stations.get(zone).map_or(0, Vec::len);
        let assigned: Vec<String> = assigned.iter().map(describe).collect();
        info!(
            zone = %zone,
            ?priority,
            ?assigned,
            nearby_stations = stations,
            "Zone allocation"
        );
    }
    if !plan.unassigned_resources.is_empty() {
        let idle: Vec<String> = plan.unassigned_resources.iter().map(describe).collect();
        info!(?idle, "Resources left unassigned");
    }
}

/// Write the plan to stdout as pretty JSON.
fn write_plan(plan: &DispatchPlan) -> Result<(), EngineError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, plan).map_err(|e| EngineError::Output {
        message: format!("failed to serialize plan: {e}"),
    })?;
    writeln!(stdout).map_err(|e| EngineError::Output {
        message: format!("failed to write plan: {e}"),
    })?;
    Ok(())
}

//! Error types for the dispatch planner binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode during startup and planning.

use crate::scenario::ScenarioError;

/// Top-level error for the dispatch planner binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: firegrid_core::ConfigError,
    },

    /// Scenario loading or validation failed.
    #[error("scenario error: {source}")]
    Scenario {
        /// The underlying scenario error.
        #[from]
        source: ScenarioError,
    },

    /// Dispatch planning failed.
    #[error("planner error: {source}")]
    Plan {
        /// The underlying planner error.
        #[from]
        source: firegrid_core::PlanError,
    },

    /// Writing the plan to stdout failed.
    #[error("output error: {message}")]
    Output {
        /// Description of the output failure.
        message: String,
    },
}

//! Error types for the `firegrid-geo` crate.
//!
//! Distance math is total and never fails. Only queries that take
//! caller-supplied search parameters return [`GeoError`].

/// Errors that can occur during geographic queries.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The search radius was negative, NaN, or infinite.
    #[error("invalid search radius: {0} miles")]
    InvalidRadius(f64),
}

//! Error types for the estimation pipeline and the appliance catalog.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::types::SourceId;

/// Failure of a single estimation request.
///
/// All variants are surfaced synchronously; a failed computation yields no
/// partial report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvisorError {
    /// The selection names an appliance that is not in the catalog.
    #[error("unknown appliance \"{0}\"")]
    UnknownAppliance(String),
    /// A numeric input is negative, non-finite, or out of range.
    #[error("invalid usage: {field} {message}")]
    InvalidUsage {
        /// Offending field (e.g. `"hours_per_day"`).
        field: String,
        /// Constraint that was violated.
        message: String,
    },
    /// No cost sources were available to choose from.
    #[error("no cost estimates to compare; the tariff table is empty")]
    EmptyEstimate,
    /// A computation needs a rate the tariff table does not carry.
    #[error("no tariff configured for {0}")]
    MissingTariff(SourceId),
    /// A configured rate is zero, negative, or not finite.
    #[error("tariff for {0} must be a positive rate, got {1}")]
    InvalidTariff(SourceId, f64),
}

impl AdvisorError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidUsage {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Failure while loading the appliance reference catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("appliance \"{0}\" appears more than once")]
    DuplicateAppliance(String),
    #[error("catalog row {row} has an empty appliance name")]
    EmptyName { row: usize },
    #[error("appliance \"{name}\" has invalid power {watts} W (must be > 0)")]
    InvalidPower { name: String, watts: f64 },
}

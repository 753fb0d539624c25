//! Household energy usage, cost, and savings advisor.
//!
//! Estimates monthly consumption per appliance, prices it under grid,
//! generator and solar tariffs, and derives advice and per-tenant solar
//! billing from the totals.

pub mod advisor;
#[cfg(feature = "api")]
pub mod api;
/// Appliance reference catalog.
pub mod catalog;
pub mod cli;
/// TOML configuration and presets.
pub mod config;
pub mod error;
pub mod io;
/// Usage, pricing, advice and tenant model.
pub mod model;
#[cfg(feature = "tui")]
pub mod tui;

pub use advisor::{Advisor, AdvisorSettings, EnergyReport, EstimateRequest};
pub use catalog::ApplianceCatalog;
pub use error::{AdvisorError, CatalogError};

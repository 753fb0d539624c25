//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use energy_advisor::advisor::{Advisor, AdvisorSettings, EstimateRequest};
use energy_advisor::catalog::ApplianceCatalog;
use energy_advisor::model::tenant::{PlanMode, TenantSelection};
use energy_advisor::model::types::UsageEntry;

/// Path to the bundled appliance catalog.
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/appliance_power_ratings.csv")
}

/// Bundled appliance catalog.
pub fn catalog() -> ApplianceCatalog {
    ApplianceCatalog::from_csv_path(&catalog_path()).expect("bundled catalog should load")
}

/// Advisor over the bundled catalog with smart-variant tariffs and rules.
pub fn smart_advisor() -> Advisor {
    Advisor::new(catalog(), AdvisorSettings::default())
}

/// Five-appliance household totalling 623.25 kWh/month.
///
/// Refrigerator 216, Air Conditioner 270, Ceiling Fan 90, Television 36,
/// Water Pump 11.25.
pub fn household_usage() -> Vec<UsageEntry> {
    vec![
        UsageEntry::new("Refrigerator", 2, 24.0),
        UsageEntry::new("Air Conditioner", 1, 6.0),
        UsageEntry::new("Ceiling Fan", 4, 10.0),
        UsageEntry::new("Television", 2, 5.0),
        UsageEntry::new("Water Pump", 1, 1.0).with_days(15),
    ]
}

pub const HOUSEHOLD_KWH: f64 = 623.25;

/// The household split across three flats, covering every appliance once.
pub fn household_request() -> EstimateRequest {
    EstimateRequest {
        usage: household_usage(),
        tenants: vec![
            TenantSelection::new("Flat 1", ["Refrigerator", "Television"]),
            TenantSelection::new("Flat 2", ["Air Conditioner"]),
            TenantSelection::new("Flat 3", ["Ceiling Fan", "Water Pump"]),
        ],
        mode: PlanMode::SmartPlan,
    }
}

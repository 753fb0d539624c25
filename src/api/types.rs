//! API response types.

use serde::Serialize;

use crate::advisor::EnergyReport;
use crate::model::palette::ChartSlice;
use crate::model::types::{ApplianceSpec, SourceId};

/// One catalog entry as exposed by `GET /catalog`.
#[derive(Debug, Serialize)]
pub struct ApplianceRecord {
    pub name: String,
    pub power_watts: f64,
}

impl From<&ApplianceSpec> for ApplianceRecord {
    fn from(spec: &ApplianceSpec) -> Self {
        Self {
            name: spec.name.clone(),
            power_watts: spec.rated_power_watts,
        }
    }
}

/// One configured tariff as exposed by `GET /tariff`.
#[derive(Debug, Serialize)]
pub struct TariffRecord {
    pub source: SourceId,
    pub rate_per_kwh: f64,
}

/// Report plus chart-ready distribution slices.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub report: EnergyReport,
    /// Per-appliance share of total kWh.
    pub usage_chart: Vec<ChartSlice>,
    /// Per-tenant share of tenant kWh (empty outside the smart plan).
    pub tenant_chart: Vec<ChartSlice>,
}

impl From<EnergyReport> for EstimateResponse {
    fn from(report: EnergyReport) -> Self {
        let usage_chart = report.usage_distribution();
        let tenant_chart = report.tenant_distribution();
        Self {
            report,
            usage_chart,
            tenant_chart,
        }
    }
}

/// Error response body for 4xx/5xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

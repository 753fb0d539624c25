//! One-shot estimation pipeline producing an [`EnergyReport`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ApplianceCatalog;
use crate::error::AdvisorError;
use crate::model::advice::{AdviceRules, advise};
use crate::model::cost::{compute_cost, cost_for, max_cost, pick_cheapest};
use crate::model::palette::{ChartSlice, distribution};
use crate::model::tenant::{self, PlanMode, TenantGroup, TenantSelection};
use crate::model::types::{CostEstimate, SourceId, TariffTable, UsageEntry, UsageResult};
use crate::model::usage::{compute_all, total_kwh};

/// Pricing and advice settings shared by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorSettings {
    pub tariff: TariffTable,
    pub rules: AdviceRules,
    /// Source whose cost is compared against the switch threshold.
    ///
    /// `None` compares the most expensive source.
    pub advice_source: Option<SourceId>,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            tariff: TariffTable::smart(),
            rules: AdviceRules::smart(),
            advice_source: None,
        }
    }
}

/// Input of one user interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateRequest {
    pub usage: Vec<UsageEntry>,
    #[serde(default)]
    pub tenants: Vec<TenantSelection>,
    #[serde(default)]
    pub mode: PlanMode,
}

/// Everything computed for one request.
///
/// Numbers are unrounded; [`fmt::Display`] renders two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReport {
    pub usage: Vec<UsageResult>,
    pub total_kwh: f64,
    pub estimates: Vec<CostEstimate>,
    pub cheapest: SourceId,
    pub advice: Vec<String>,
    pub mode: PlanMode,
    pub tenants: Vec<TenantGroup>,
}

impl EnergyReport {
    /// Per-appliance consumption slices, coloured by row order.
    pub fn usage_distribution(&self) -> Vec<ChartSlice> {
        distribution(
            self.usage
                .iter()
                .map(|u| (u.appliance_name.as_str(), u.monthly_kwh)),
        )
    }

    /// Per-tenant consumption slices, coloured by row order.
    pub fn tenant_distribution(&self) -> Vec<ChartSlice> {
        distribution(
            self.tenants
                .iter()
                .map(|t| (t.tenant_label.as_str(), t.monthly_kwh)),
        )
    }
}

/// Estimation service bound to a catalog and a set of tariffs.
#[derive(Debug, Clone)]
pub struct Advisor {
    catalog: ApplianceCatalog,
    settings: AdvisorSettings,
}

impl Advisor {
    pub fn new(catalog: ApplianceCatalog, settings: AdvisorSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &ApplianceCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &AdvisorSettings {
        &self.settings
    }

    /// Runs usage, pricing, advice and (in smart-plan mode) tenant billing.
    ///
    /// # Errors
    ///
    /// Returns the first [`AdvisorError`] hit; no partial report is produced.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EnergyReport, AdvisorError> {
        let usage = compute_all(&request.usage, &self.catalog)?;
        let total = total_kwh(&usage);
        let estimates = compute_cost(total, &self.settings.tariff)?;
        let cheapest = pick_cheapest(&estimates)?;

        let advice_cost = match self.settings.advice_source {
            Some(source) => {
                cost_for(&estimates, source).ok_or(AdvisorError::MissingTariff(source))?
            }
            None => max_cost(&estimates),
        };
        let advice = advise(total, advice_cost, cheapest, &self.settings.rules);

        let tenants = tenant::plan(
            request.mode,
            &request.tenants,
            &usage,
            &self.settings.tariff,
        )?;

        tracing::info!(
            entries = usage.len(),
            total_kwh = total,
            cheapest = %cheapest,
            tips = advice.len(),
            tenants = tenants.len(),
            "estimate complete"
        );

        Ok(EnergyReport {
            usage,
            total_kwh: total,
            estimates,
            cheapest,
            advice,
            mode: request.mode,
            tenants,
        })
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Usage ---")?;
        writeln!(
            f,
            "{:<22} {:>4} {:>8} {:>9} {:>5} {:>12}",
            "Appliance", "Qty", "Hrs/day", "Watts", "Days", "kWh/month"
        )?;
        for u in &self.usage {
            writeln!(
                f,
                "{:<22} {:>4} {:>8.2} {:>9.2} {:>5} {:>12.2}",
                u.appliance_name,
                u.quantity,
                u.hours_per_day,
                u.rated_power_watts,
                u.days_per_month,
                u.monthly_kwh
            )?;
        }
        writeln!(f, "Total monthly energy:  {:.2} kWh", self.total_kwh)?;

        writeln!(f, "\n--- Cost by source ---")?;
        for e in &self.estimates {
            let marker = if e.source == self.cheapest { " (cheapest)" } else { "" };
            writeln!(
                f,
                "{:<10} @ {:>7.2}/kWh: {:>12.2}{marker}",
                e.source.label(),
                e.rate,
                e.estimated_cost
            )?;
        }

        if !self.tenants.is_empty() {
            writeln!(f, "\n--- Smart plan (solar billing) ---")?;
            for t in &self.tenants {
                let names: Vec<&str> = t.selected_appliance_names.iter().map(String::as_str).collect();
                writeln!(
                    f,
                    "{:<16} {:>10.2} kWh {:>12.2}  [{}]",
                    t.tenant_label,
                    t.monthly_kwh,
                    t.estimated_solar_cost,
                    names.join(", ")
                )?;
            }
        }

        write!(f, "\n--- Recommendations ---")?;
        if self.advice.is_empty() {
            write!(f, "\n{} is already your cheapest option.", self.cheapest)?;
        }
        for tip in &self.advice {
            write!(f, "\n- {tip}")?;
        }
        Ok(())
    }
}

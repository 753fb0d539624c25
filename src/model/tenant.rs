//! Smart-plan re-aggregation of usage per tenant.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

use super::types::{SourceId, TariffTable, UsageResult};

/// Whether tenant billing is computed for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    #[default]
    Basic,
    SmartPlan,
}

/// A tenant's appliance selection as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantSelection {
    pub label: String,
    /// Appliance names; duplicates are ignored.
    pub appliances: Vec<String>,
}

impl TenantSelection {
    pub fn new<I, S>(label: impl Into<String>, appliances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            appliances: appliances.into_iter().map(Into::into).collect(),
        }
    }
}

/// Consumption and solar-priced cost attributed to one tenant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantGroup {
    pub tenant_label: String,
    pub selected_appliance_names: BTreeSet<String>,
    pub monthly_kwh: f64,
    pub estimated_solar_cost: f64,
}

/// Sums usage per tenant and prices it at `solar_rate`.
///
/// Tenants are billed at the solar rate whatever the cheapest source is.
/// Appliances absent from `usage` contribute nothing. Output order follows
/// `tenants`.
pub fn aggregate(
    tenants: &[TenantSelection],
    usage: &[UsageResult],
    solar_rate: f64,
) -> Vec<TenantGroup> {
    tenants
        .iter()
        .map(|tenant| {
            let selected: BTreeSet<String> = tenant.appliances.iter().cloned().collect();

            for name in &selected {
                if !usage.iter().any(|u| &u.appliance_name == name) {
                    tracing::warn!(
                        tenant = %tenant.label,
                        appliance = %name,
                        "tenant selects an appliance with no recorded usage"
                    );
                }
            }

            let monthly_kwh: f64 = usage
                .iter()
                .filter(|u| selected.contains(&u.appliance_name))
                .map(|u| u.monthly_kwh)
                .sum();

            TenantGroup {
                tenant_label: tenant.label.clone(),
                selected_appliance_names: selected,
                monthly_kwh,
                estimated_solar_cost: monthly_kwh * solar_rate,
            }
        })
        .collect()
}

/// Runs tenant aggregation when the smart plan is active.
///
/// # Errors
///
/// Returns [`AdvisorError::MissingTariff`] in smart-plan mode if `tariff`
/// has no solar rate.
pub fn plan(
    mode: PlanMode,
    tenants: &[TenantSelection],
    usage: &[UsageResult],
    tariff: &TariffTable,
) -> Result<Vec<TenantGroup>, AdvisorError> {
    match mode {
        PlanMode::Basic => Ok(Vec::new()),
        PlanMode::SmartPlan => {
            let solar_rate = tariff
                .rate(SourceId::Solar)
                .ok_or(AdvisorError::MissingTariff(SourceId::Solar))?;
            Ok(aggregate(tenants, usage, solar_rate))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(name: &str, kwh: f64) -> UsageResult {
        UsageResult {
            appliance_name: name.to_string(),
            quantity: 1,
            hours_per_day: 1.0,
            rated_power_watts: 100.0,
            days_per_month: 30,
            monthly_kwh: kwh,
        }
    }

    fn sample_usage() -> Vec<UsageResult> {
        vec![
            usage("Fridge", 108.0),
            usage("Fan", 9.0),
            usage("TV", 21.6),
            usage("Iron", 15.0),
        ]
    }

    #[test]
    fn sums_selected_appliances_at_solar_rate() {
        let tenants = vec![TenantSelection::new("Flat 1", ["Fridge", "Fan"])];
        let groups = aggregate(&tenants, &sample_usage(), 20.0);
        assert_eq!(groups.len(), 1);
        assert!((groups[0].monthly_kwh - 117.0).abs() < 1e-9);
        assert!((groups[0].estimated_solar_cost - 2340.0).abs() < 1e-9);
    }

    #[test]
    fn duplicates_in_selection_count_once() {
        let tenants = vec![TenantSelection::new("Flat 1", ["Fan", "Fan", "Fan"])];
        let groups = aggregate(&tenants, &sample_usage(), 20.0);
        assert_eq!(groups[0].selected_appliance_names.len(), 1);
        assert!((groups[0].monthly_kwh - 9.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_selection_contributes_zero() {
        let tenants = vec![TenantSelection::new("Flat 2", ["Sauna"])];
        let groups = aggregate(&tenants, &sample_usage(), 20.0);
        assert_eq!(groups[0].monthly_kwh, 0.0);
        assert_eq!(groups[0].estimated_solar_cost, 0.0);
    }

    #[test]
    fn disjoint_tenants_do_not_double_count() {
        let usage = sample_usage();
        let tenants = vec![
            TenantSelection::new("A", ["Fridge", "TV"]),
            TenantSelection::new("B", ["Fan"]),
        ];
        let groups = aggregate(&tenants, &usage, 20.0);
        let tenant_sum: f64 = groups.iter().map(|g| g.monthly_kwh).sum();
        assert!((tenant_sum - (108.0 + 21.6 + 9.0)).abs() < 1e-9);

        let total: f64 = usage.iter().map(|u| u.monthly_kwh).sum();
        assert!((tenant_sum - total).abs() > 1.0, "Iron is not covered");
    }

    #[test]
    fn disjoint_tenants_covering_everything_match_total() {
        let usage = sample_usage();
        let tenants = vec![
            TenantSelection::new("A", ["Fridge", "TV"]),
            TenantSelection::new("B", ["Fan", "Iron"]),
        ];
        let groups = aggregate(&tenants, &usage, 20.0);
        let tenant_sum: f64 = groups.iter().map(|g| g.monthly_kwh).sum();
        let total: f64 = usage.iter().map(|u| u.monthly_kwh).sum();
        assert!((tenant_sum - total).abs() < 1e-9);
    }

    #[test]
    fn order_follows_input() {
        let tenants = vec![
            TenantSelection::new("Zed", ["Fan"]),
            TenantSelection::new("Amy", ["TV"]),
        ];
        let groups = aggregate(&tenants, &sample_usage(), 20.0);
        let labels: Vec<&str> = groups.iter().map(|g| g.tenant_label.as_str()).collect();
        assert_eq!(labels, vec!["Zed", "Amy"]);
    }

    #[test]
    fn basic_mode_skips_aggregation() {
        let tenants = vec![TenantSelection::new("A", ["Fan"])];
        let groups = plan(PlanMode::Basic, &tenants, &sample_usage(), &TariffTable::smart());
        assert_eq!(groups, Ok(Vec::new()));
    }

    #[test]
    fn smart_plan_uses_configured_solar_rate() {
        let tenants = vec![TenantSelection::new("A", ["Fan"])];
        let tariff = TariffTable::smart().with_rate(SourceId::Solar, 25.0);
        let groups = plan(PlanMode::SmartPlan, &tenants, &sample_usage(), &tariff)
            .expect("plan should succeed");
        assert!((groups[0].estimated_solar_cost - 225.0).abs() < 1e-9);
    }

    #[test]
    fn smart_plan_without_solar_rate_fails() {
        let tariff = TariffTable::new().with_rate(SourceId::Grid, 68.0);
        let err = plan(PlanMode::SmartPlan, &[], &sample_usage(), &tariff).unwrap_err();
        assert_eq!(err, AdvisorError::MissingTariff(SourceId::Solar));
    }
}

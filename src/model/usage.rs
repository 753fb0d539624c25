//! Monthly energy consumption per usage entry.

use crate::catalog::ApplianceCatalog;
use crate::error::AdvisorError;

use super::types::{UsageEntry, UsageResult};

/// Computes the monthly consumption of one usage entry.
///
/// `monthly_kwh = quantity * hours_per_day * rated_power_watts * days_per_month / 1000`,
/// kept unrounded so that totals do not accumulate rounding error.
///
/// # Errors
///
/// Returns [`AdvisorError::InvalidUsage`] if the entry is out of range, or
/// [`AdvisorError::UnknownAppliance`] if the appliance is not in `catalog`.
pub fn compute_usage(
    entry: &UsageEntry,
    catalog: &ApplianceCatalog,
) -> Result<UsageResult, AdvisorError> {
    entry.validate()?;
    let spec = catalog.get(&entry.appliance_name)?;

    let monthly_kwh = f64::from(entry.quantity)
        * entry.hours_per_day
        * spec.rated_power_watts
        * f64::from(entry.days_per_month)
        / 1000.0;

    tracing::debug!(
        appliance = %entry.appliance_name,
        quantity = entry.quantity,
        hours_per_day = entry.hours_per_day,
        days_per_month = entry.days_per_month,
        monthly_kwh,
        "computed usage"
    );

    Ok(UsageResult {
        appliance_name: spec.name.clone(),
        quantity: entry.quantity,
        hours_per_day: entry.hours_per_day,
        rated_power_watts: spec.rated_power_watts,
        days_per_month: entry.days_per_month,
        monthly_kwh,
    })
}

/// Computes every entry, stopping at the first invalid one.
///
/// # Errors
///
/// Propagates the first error from [`compute_usage`].
pub fn compute_all(
    entries: &[UsageEntry],
    catalog: &ApplianceCatalog,
) -> Result<Vec<UsageResult>, AdvisorError> {
    entries.iter().map(|e| compute_usage(e, catalog)).collect()
}

/// Sums the unrounded monthly consumption of all results.
pub fn total_kwh(results: &[UsageResult]) -> f64 {
    results.iter().map(|r| r.monthly_kwh).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{ApplianceSpec, round2};

    fn catalog() -> ApplianceCatalog {
        ApplianceCatalog::from_specs(vec![
            ApplianceSpec {
                name: "Lamp".into(),
                rated_power_watts: 100.0,
            },
            ApplianceSpec {
                name: "Router".into(),
                rated_power_watts: 7.0,
            },
        ])
        .expect("catalog should build")
    }

    #[test]
    fn formula_matches_worked_example() {
        // 2 * 5 h * 100 W * 30 d / 1000 = 30 kWh
        let entry = UsageEntry::new("Lamp", 2, 5.0).with_days(30);
        let result = compute_usage(&entry, &catalog()).expect("should compute");
        assert!((result.monthly_kwh - 30.0).abs() < 1e-9);
        assert_eq!(result.rated_power_watts, 100.0);
    }

    #[test]
    fn formula_holds_across_ranges() {
        let catalog = catalog();
        for quantity in [1_u32, 3, 12] {
            for hours in [0.0, 0.5, 7.25, 24.0] {
                for days in [1_u32, 15, 31] {
                    let entry = UsageEntry::new("Router", quantity, hours).with_days(days);
                    let r = compute_usage(&entry, &catalog).expect("should compute");
                    let expected = f64::from(quantity) * hours * 7.0 * f64::from(days) / 1000.0;
                    assert!((r.monthly_kwh - expected).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn unknown_appliance_fails() {
        let entry = UsageEntry::new("Heater", 1, 1.0);
        let err = compute_usage(&entry, &catalog()).unwrap_err();
        assert_eq!(err, AdvisorError::UnknownAppliance("Heater".into()));
    }

    #[test]
    fn invalid_entry_fails_before_lookup() {
        let entry = UsageEntry::new("Heater", 1, 25.0);
        let err = compute_usage(&entry, &catalog()).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidUsage { .. }));
    }

    #[test]
    fn total_uses_unrounded_values() {
        // Each entry is 0.0035 kWh; rounding first would give 0.0 per entry.
        let catalog = catalog();
        let entries: Vec<UsageEntry> = (0..10)
            .map(|_| UsageEntry::new("Router", 1, 0.5).with_days(1))
            .collect();
        let results = compute_all(&entries, &catalog).expect("should compute");
        let total = total_kwh(&results);
        assert!((total - 0.035).abs() < 1e-12);
        let pre_rounded: f64 = results.iter().map(|r| round2(r.monthly_kwh)).sum();
        assert_eq!(pre_rounded, 0.0);
    }

    #[test]
    fn total_equals_sum_of_entries() {
        let catalog = catalog();
        let entries = vec![
            UsageEntry::new("Lamp", 2, 5.0),
            UsageEntry::new("Router", 1, 24.0),
            UsageEntry::new("Lamp", 1, 3.5).with_days(12),
        ];
        let results = compute_all(&entries, &catalog).expect("should compute");
        let expected = 30.0 + 5.04 + 4.2;
        assert!((total_kwh(&results) - expected).abs() < 1e-9);
    }
}

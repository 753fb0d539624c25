//! Per-source cost estimation and cheapest-source selection.

use crate::error::AdvisorError;

use super::types::{CostEstimate, SourceId, TariffTable};

/// Prices `total_kwh` under every source in `tariff`.
///
/// Estimates are returned in [`SourceId`] order (Grid, Generator, Solar),
/// skipping sources the table does not carry.
///
/// # Errors
///
/// Returns [`AdvisorError::InvalidUsage`] if `total_kwh` is negative or not finite,
/// and [`AdvisorError::InvalidTariff`] for any rate that is not a positive number.
pub fn compute_cost(total_kwh: f64, tariff: &TariffTable) -> Result<Vec<CostEstimate>, AdvisorError> {
    if !total_kwh.is_finite() || total_kwh < 0.0 {
        return Err(AdvisorError::invalid(
            "total_kwh",
            format!("must be a non-negative number, got {total_kwh}"),
        ));
    }

    tariff
        .iter()
        .map(|(source, rate)| {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(AdvisorError::InvalidTariff(source, rate));
            }
            Ok(CostEstimate {
                source,
                rate,
                estimated_cost: total_kwh * rate,
            })
        })
        .collect()
}

/// Returns the source with the lowest estimated cost.
///
/// Ties go to the first estimate in slice order.
///
/// # Errors
///
/// Returns [`AdvisorError::EmptyEstimate`] if `estimates` is empty.
pub fn pick_cheapest(estimates: &[CostEstimate]) -> Result<SourceId, AdvisorError> {
    let mut iter = estimates.iter();
    let first = iter.next().ok_or(AdvisorError::EmptyEstimate)?;
    let best = iter.fold(first, |best, e| {
        if e.estimated_cost < best.estimated_cost {
            e
        } else {
            best
        }
    });
    Ok(best.source)
}

/// Highest estimated cost across sources, or 0 for no estimates.
pub fn max_cost(estimates: &[CostEstimate]) -> f64 {
    estimates
        .iter()
        .map(|e| e.estimated_cost)
        .fold(0.0, f64::max)
}

/// Estimated cost under one specific source, if present.
pub fn cost_for(estimates: &[CostEstimate], source: SourceId) -> Option<f64> {
    estimates
        .iter()
        .find(|e| e.source == source)
        .map(|e| e.estimated_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(source: SourceId, cost: f64) -> CostEstimate {
        CostEstimate {
            source,
            rate: 1.0,
            estimated_cost: cost,
        }
    }

    #[test]
    fn worked_example_costs() {
        let estimates = compute_cost(30.0, &TariffTable::smart()).expect("should price");
        let costs: Vec<f64> = estimates.iter().map(|e| e.estimated_cost).collect();
        assert_eq!(costs, vec![2040.0, 4500.0, 600.0]);
        assert_eq!(pick_cheapest(&estimates), Ok(SourceId::Solar));
    }

    #[test]
    fn zero_usage_is_free_everywhere() {
        let estimates = compute_cost(0.0, &TariffTable::classic()).expect("should price");
        assert!(estimates.iter().all(|e| e.estimated_cost == 0.0));
        // All tied: first in source order wins.
        assert_eq!(pick_cheapest(&estimates), Ok(SourceId::Grid));
    }

    #[test]
    fn negative_total_rejected() {
        let err = compute_cost(-0.1, &TariffTable::smart()).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidUsage { ref field, .. } if field == "total_kwh"));
    }

    #[test]
    fn non_positive_or_nan_rate_rejected() {
        let nan = TariffTable::smart().with_rate(SourceId::Grid, f64::NAN);
        let err = compute_cost(30.0, &nan).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidTariff(SourceId::Grid, r) if r.is_nan()));

        let negative = TariffTable::smart().with_rate(SourceId::Solar, -5.0);
        assert_eq!(
            compute_cost(30.0, &negative),
            Err(AdvisorError::InvalidTariff(SourceId::Solar, -5.0))
        );

        let zero = TariffTable::smart().with_rate(SourceId::Generator, 0.0);
        assert!(compute_cost(30.0, &zero).is_err());
    }

    #[test]
    fn partial_tariff_skips_missing_sources() {
        let tariff = TariffTable::new()
            .with_rate(SourceId::Generator, 150.0)
            .with_rate(SourceId::Grid, 68.0);
        let estimates = compute_cost(10.0, &tariff).expect("should price");
        let sources: Vec<SourceId> = estimates.iter().map(|e| e.source).collect();
        assert_eq!(sources, vec![SourceId::Grid, SourceId::Generator]);
    }

    #[test]
    fn cheapest_is_minimum() {
        let estimates = vec![
            estimate(SourceId::Grid, 500.0),
            estimate(SourceId::Generator, 120.0),
            estimate(SourceId::Solar, 300.0),
        ];
        assert_eq!(pick_cheapest(&estimates), Ok(SourceId::Generator));
    }

    #[test]
    fn cheapest_tie_goes_to_first() {
        let estimates = vec![
            estimate(SourceId::Grid, 300.0),
            estimate(SourceId::Generator, 100.0),
            estimate(SourceId::Solar, 100.0),
        ];
        assert_eq!(pick_cheapest(&estimates), Ok(SourceId::Generator));
    }

    #[test]
    fn cheapest_of_empty_fails() {
        assert_eq!(pick_cheapest(&[]), Err(AdvisorError::EmptyEstimate));
    }

    #[test]
    fn max_and_lookup() {
        let estimates = compute_cost(30.0, &TariffTable::smart()).expect("should price");
        assert_eq!(max_cost(&estimates), 4500.0);
        assert_eq!(cost_for(&estimates, SourceId::Grid), Some(2040.0));
        assert_eq!(max_cost(&[]), 0.0);
    }
}

//! Threshold rules that turn usage and cost into advice.

use serde::{Deserialize, Serialize};

use super::types::SourceId;

pub const TIP_REDUCE_USAGE: &str = "Consider reducing usage hours or quantity.";
pub const TIP_SWITCH_TO_SOLAR: &str =
    "You may want to switch to inverter-based or solar appliances.";
pub const TIP_OFF_PEAK: &str =
    "Run heavy appliances during off-peak hours to lower your grid bill.";
pub const TIP_AVOID_HEAVY_LOAD: &str =
    "Avoid running heavy loads on the generator; stagger them to save fuel.";
pub const TIP_SETUP_DECENT: &str = "Your setup is decent. Keep monitoring your usage.";
pub const TIP_EFFICIENT: &str = "Your setup is energy-efficient. Keep it up!";

/// How the rule list reacts to the cheapest source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvicePolicy {
    /// Source-specific tips; no advice at all when solar is already cheapest.
    #[default]
    SourceAware,
    /// Usage and cost thresholds only, regardless of source.
    ThresholdOnly,
}

/// Thresholds and policy for [`advise`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdviceRules {
    pub policy: AdvicePolicy,
    /// Monthly kWh above which the usage-reduction tip fires.
    pub reduction_kwh_threshold: f64,
    /// Monthly cost above which the inverter/solar tip fires.
    pub switch_cost_threshold: f64,
}

impl AdviceRules {
    /// Rules of the multi-appliance smart variant.
    pub fn smart() -> Self {
        Self {
            policy: AdvicePolicy::SourceAware,
            reduction_kwh_threshold: 150.0,
            switch_cost_threshold: 10_000.0,
        }
    }

    /// Rules of the single-appliance classic variant.
    pub fn classic() -> Self {
        Self {
            policy: AdvicePolicy::ThresholdOnly,
            reduction_kwh_threshold: 100.0,
            switch_cost_threshold: 5_000.0,
        }
    }
}

impl Default for AdviceRules {
    fn default() -> Self {
        Self::smart()
    }
}

/// Evaluates the advice rules in fixed order.
///
/// Each rule appends its tip independently; the fallback tip only appears
/// when nothing else fired. Pure and total over finite inputs.
pub fn advise(
    total_kwh: f64,
    max_cost: f64,
    cheapest: SourceId,
    rules: &AdviceRules,
) -> Vec<String> {
    let mut tips = Vec::new();

    match rules.policy {
        AdvicePolicy::SourceAware => {
            if cheapest == SourceId::Solar {
                return tips;
            }
            if total_kwh > rules.reduction_kwh_threshold {
                tips.push(TIP_REDUCE_USAGE.to_string());
            }
            if max_cost > rules.switch_cost_threshold {
                tips.push(TIP_SWITCH_TO_SOLAR.to_string());
            }
            match cheapest {
                SourceId::Grid => tips.push(TIP_OFF_PEAK.to_string()),
                SourceId::Generator => tips.push(TIP_AVOID_HEAVY_LOAD.to_string()),
                SourceId::Solar => {}
            }
            if tips.is_empty() {
                tips.push(TIP_SETUP_DECENT.to_string());
            }
        }
        AdvicePolicy::ThresholdOnly => {
            if total_kwh > rules.reduction_kwh_threshold {
                tips.push(TIP_REDUCE_USAGE.to_string());
            }
            if max_cost > rules.switch_cost_threshold {
                tips.push(TIP_SWITCH_TO_SOLAR.to_string());
            }
            if tips.is_empty() {
                tips.push(TIP_EFFICIENT.to_string());
            }
        }
    }

    tips
}

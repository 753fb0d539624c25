//! Core data types shared by the estimation model.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Default number of usage days per month.
pub const DEFAULT_DAYS_PER_MONTH: u32 = 30;

/// Power source an estimate can be priced against.
///
/// Declaration order is the stable reporting order and the tie-break order
/// for [`crate::model::cost::pick_cheapest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    /// Grid utility supply (NEPA).
    #[serde(alias = "nepa")]
    Grid,
    /// Petrol or diesel generator.
    Generator,
    /// Solar installation (maintenance cost only).
    Solar,
}

impl SourceId {
    /// All sources in reporting order.
    pub const ALL: [SourceId; 3] = [SourceId::Grid, SourceId::Generator, SourceId::Solar];

    pub fn label(self) -> &'static str {
        match self {
            SourceId::Grid => "Grid",
            SourceId::Generator => "Generator",
            SourceId::Solar => "Solar",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cost per kWh for each configured power source.
///
/// Iteration always follows [`SourceId`] order regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TariffTable {
    rates: BTreeMap<SourceId, f64>,
}

impl TariffTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Tariffs of the multi-appliance smart variant (Grid 68, Generator 150, Solar 20).
    pub fn smart() -> Self {
        Self::new()
            .with_rate(SourceId::Grid, 68.0)
            .with_rate(SourceId::Generator, 150.0)
            .with_rate(SourceId::Solar, 20.0)
    }

    /// Tariffs of the single-appliance classic variant (NEPA Band B 74, Generator 170, Solar 20).
    pub fn classic() -> Self {
        Self::new()
            .with_rate(SourceId::Grid, 74.0)
            .with_rate(SourceId::Generator, 170.0)
            .with_rate(SourceId::Solar, 20.0)
    }

    /// Builder-style setter; replaces any existing rate for `source`.
    pub fn with_rate(mut self, source: SourceId, rate: f64) -> Self {
        self.rates.insert(source, rate);
        self
    }

    pub fn rate(&self, source: SourceId) -> Option<f64> {
        self.rates.get(&source).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceId, f64)> + '_ {
        self.rates.iter().map(|(s, r)| (*s, *r))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::smart()
    }
}

/// Reference data for one appliance type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSpec {
    pub name: String,
    pub rated_power_watts: f64,
}

/// One appliance selection as entered by the user.
///
/// Describes the aggregate usage of `quantity` identical units, not one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageEntry {
    /// Catalog name of the appliance.
    #[serde(rename = "appliance")]
    pub appliance_name: String,
    /// Number of units in use (>= 1).
    pub quantity: u32,
    /// Daily usage per unit (0.0 to 24.0 hours).
    pub hours_per_day: f64,
    /// Days of use per month (1 to 31).
    #[serde(default = "default_days_per_month")]
    pub days_per_month: u32,
}

fn default_days_per_month() -> u32 {
    DEFAULT_DAYS_PER_MONTH
}

impl UsageEntry {
    /// Creates an entry using [`DEFAULT_DAYS_PER_MONTH`].
    pub fn new(appliance_name: impl Into<String>, quantity: u32, hours_per_day: f64) -> Self {
        Self {
            appliance_name: appliance_name.into(),
            quantity,
            hours_per_day,
            days_per_month: DEFAULT_DAYS_PER_MONTH,
        }
    }

    pub fn with_days(mut self, days_per_month: u32) -> Self {
        self.days_per_month = days_per_month;
        self
    }

    /// Checks the numeric ranges of the entry.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::InvalidUsage`] naming the first field out of range.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        if self.quantity == 0 {
            return Err(AdvisorError::invalid("quantity", "must be >= 1"));
        }
        if !self.hours_per_day.is_finite() || !(0.0..=24.0).contains(&self.hours_per_day) {
            return Err(AdvisorError::invalid(
                "hours_per_day",
                format!("must be in [0, 24], got {}", self.hours_per_day),
            ));
        }
        if !(1..=31).contains(&self.days_per_month) {
            return Err(AdvisorError::invalid(
                "days_per_month",
                format!("must be in [1, 31], got {}", self.days_per_month),
            ));
        }
        Ok(())
    }
}

/// Monthly consumption of one usage entry.
///
/// `monthly_kwh` is unrounded; round only when rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageResult {
    pub appliance_name: String,
    pub quantity: u32,
    pub hours_per_day: f64,
    pub rated_power_watts: f64,
    pub days_per_month: u32,
    pub monthly_kwh: f64,
}

/// Cost of the total monthly consumption under one source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    pub source: SourceId,
    /// Cost per kWh.
    pub rate: f64,
    pub estimated_cost: f64,
}

/// Rounds to two decimal places for display and export.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

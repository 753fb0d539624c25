//! TOML-based advisor configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::advisor::{AdvisorSettings, EstimateRequest};
use crate::error::AdvisorError;
use crate::model::advice::{AdvicePolicy, AdviceRules};
use crate::model::tenant::{PlanMode, TenantSelection};
use crate::model::types::{SourceId, TariffTable, UsageEntry};

/// Top-level advisor configuration parsed from TOML.
///
/// All sections have defaults matching the `smart` preset. Load from TOML
/// with [`AdvisorConfig::from_toml_file`] or pick a preset with
/// [`AdvisorConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    /// Appliance catalog location.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Cost per kWh for each source; omitted sources are not priced.
    #[serde(default)]
    pub tariff: TariffTable,
    /// Advice thresholds and policy.
    #[serde(default)]
    pub advice: AdviceConfig,
    /// Tenant plan toggle.
    #[serde(default)]
    pub plan: PlanConfig,
    /// Appliance selections.
    #[serde(default)]
    pub usage: Vec<UsageEntry>,
    /// Tenant selections for the smart plan.
    #[serde(default)]
    pub tenants: Vec<TenantSelection>,
}

/// Appliance catalog location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// CSV file with `Appliance` and `Power (Watts)` columns. The embedded
    /// catalog is used when absent.
    pub path: Option<PathBuf>,
}

/// Advice thresholds and policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdviceConfig {
    /// `"source_aware"` or `"threshold_only"`.
    pub policy: AdvicePolicy,
    /// Monthly kWh above which usage reduction is advised.
    pub reduction_kwh_threshold: f64,
    /// Monthly cost above which switching to solar is advised.
    pub switch_cost_threshold: f64,
    /// Source whose cost is checked against the switch threshold
    /// (most expensive source if unset).
    pub source: Option<SourceId>,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        let rules = AdviceRules::smart();
        Self {
            policy: rules.policy,
            reduction_kwh_threshold: rules.reduction_kwh_threshold,
            switch_cost_threshold: rules.switch_cost_threshold,
            source: None,
        }
    }
}

/// Tenant plan toggle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// `"basic"` or `"smart_plan"`.
    pub mode: PlanMode,
}

/// Configuration error with field path and constraint description.
#[derive(Debug, thiserror::Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"tariff.grid"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl AdvisorConfig {
    /// Multi-appliance smart variant: Grid 68 / Generator 150 / Solar 20,
    /// source-aware advice, tenant plan enabled.
    pub fn smart() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            tariff: TariffTable::smart(),
            advice: AdviceConfig::default(),
            plan: PlanConfig {
                mode: PlanMode::SmartPlan,
            },
            usage: vec![
                UsageEntry::new("Refrigerator", 1, 24.0),
                UsageEntry::new("Ceiling Fan", 3, 10.0),
                UsageEntry::new("LED Bulb", 8, 6.0),
                UsageEntry::new("Television", 1, 5.0),
                UsageEntry::new("Electric Iron", 1, 1.0).with_days(8),
            ],
            tenants: vec![
                TenantSelection::new("Flat A", ["Refrigerator", "Television"]),
                TenantSelection::new("Flat B", ["Ceiling Fan", "LED Bulb", "Electric Iron"]),
            ],
        }
    }

    /// Single-appliance classic variant: NEPA 74 / Generator 170 / Solar 20,
    /// threshold-only advice priced on NEPA.
    pub fn classic() -> Self {
        let rules = AdviceRules::classic();
        Self {
            catalog: CatalogConfig::default(),
            tariff: TariffTable::classic(),
            advice: AdviceConfig {
                policy: rules.policy,
                reduction_kwh_threshold: rules.reduction_kwh_threshold,
                switch_cost_threshold: rules.switch_cost_threshold,
                source: Some(SourceId::Grid),
            },
            plan: PlanConfig::default(),
            usage: vec![UsageEntry::new("Refrigerator", 1, 6.0)],
            tenants: Vec::new(),
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["smart", "classic"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "smart" => Ok(Self::smart()),
            "classic" => Ok(Self::classic()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// A relative `catalog.path` is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        let mut cfg = Self::from_toml_str(&content)?;
        if let Some(catalog) = cfg.catalog.path.as_mut() {
            if catalog.is_relative() {
                if let Some(dir) = path.parent() {
                    *catalog = dir.join(&*catalog);
                }
            }
        }
        Ok(cfg)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Pricing and advice settings for an [`crate::advisor::Advisor`].
    pub fn settings(&self) -> AdvisorSettings {
        AdvisorSettings {
            tariff: self.tariff.clone(),
            rules: AdviceRules {
                policy: self.advice.policy,
                reduction_kwh_threshold: self.advice.reduction_kwh_threshold,
                switch_cost_threshold: self.advice.switch_cost_threshold,
            },
            advice_source: self.advice.source,
        }
    }

    /// The configured selections as one estimation request.
    pub fn request(&self) -> EstimateRequest {
        EstimateRequest {
            usage: self.usage.clone(),
            tenants: self.tenants.clone(),
            mode: self.plan.mode,
        }
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. Appliance names are
    /// checked against the catalog at estimation time, not here.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.tariff.is_empty() {
            errors.push(ConfigError::new("tariff", "at least one source must be priced"));
        }
        for (source, rate) in self.tariff.iter() {
            if !rate.is_finite() || rate <= 0.0 {
                errors.push(ConfigError::new(
                    format!("tariff.{}", source.label().to_lowercase()),
                    format!("must be > 0, got {rate}"),
                ));
            }
        }

        let a = &self.advice;
        if !a.reduction_kwh_threshold.is_finite() || a.reduction_kwh_threshold < 0.0 {
            errors.push(ConfigError::new("advice.reduction_kwh_threshold", "must be >= 0"));
        }
        if !a.switch_cost_threshold.is_finite() || a.switch_cost_threshold < 0.0 {
            errors.push(ConfigError::new("advice.switch_cost_threshold", "must be >= 0"));
        }
        if let Some(source) = a.source {
            if self.tariff.rate(source).is_none() {
                errors.push(ConfigError::new(
                    "advice.source",
                    format!("{source} has no tariff configured"),
                ));
            }
        }

        for (i, entry) in self.usage.iter().enumerate() {
            if let Err(AdvisorError::InvalidUsage { field, message }) = entry.validate() {
                errors.push(ConfigError::new(format!("usage[{i}].{field}"), message));
            }
        }

        for (i, tenant) in self.tenants.iter().enumerate() {
            if tenant.label.trim().is_empty() {
                errors.push(ConfigError::new(format!("tenants[{i}].label"), "must not be empty"));
            }
        }
        if self.plan.mode == PlanMode::SmartPlan && self.tariff.rate(SourceId::Solar).is_none() {
            errors.push(ConfigError::new(
                "plan.mode",
                "smart_plan bills tenants at the solar rate; tariff.solar is required",
            ));
        }

        errors
    }
}

impl fmt::Display for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rates: Vec<String> = self
            .tariff
            .iter()
            .map(|(s, r)| format!("{s}={r}"))
            .collect();
        write!(
            f,
            "tariff [{}], advice {:?} (>{} kWh, >{} cost), plan {:?}, {} entries, {} tenants",
            rates.join(", "),
            self.advice.policy,
            self.advice.reduction_kwh_threshold,
            self.advice.switch_cost_threshold,
            self.plan.mode,
            self.usage.len(),
            self.tenants.len()
        )
    }
}

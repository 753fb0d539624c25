//! Appliance reference catalog loaded from CSV.
//!
//! The catalog file needs at least the columns `Appliance` and
//! `Power (Watts)`; any other columns are ignored. It is loaded once and
//! treated as read-only afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AdvisorError, CatalogError};
use crate::model::types::ApplianceSpec;

/// Catalog used when no file is configured; same table as the bundled data file.
const BUILTIN_CSV: &str = include_str!("../data/appliance_power_ratings.csv");

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Appliance")]
    appliance: String,
    #[serde(rename = "Power (Watts)")]
    power_watts: f64,
}

/// Read-only appliance lookup keyed by name.
#[derive(Debug, Clone)]
pub struct ApplianceCatalog {
    specs: Vec<ApplianceSpec>,
    index: HashMap<String, usize>,
}

impl ApplianceCatalog {
    /// Builds a catalog from already-parsed specs.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` for empty names, duplicate names, or
    /// non-positive power ratings.
    pub fn from_specs(specs: Vec<ApplianceSpec>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(specs.len());
        for (row, spec) in specs.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { row: row + 1 });
            }
            if !spec.rated_power_watts.is_finite() || spec.rated_power_watts <= 0.0 {
                return Err(CatalogError::InvalidPower {
                    name: spec.name.clone(),
                    watts: spec.rated_power_watts,
                });
            }
            if index.insert(spec.name.clone(), row).is_some() {
                return Err(CatalogError::DuplicateAppliance(spec.name.clone()));
            }
        }
        Ok(Self { specs, index })
    }

    /// Parses a catalog from CSV read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the CSV is malformed or a row is invalid.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut specs = Vec::new();
        for row in rdr.deserialize::<CatalogRow>() {
            let row = row?;
            specs.push(ApplianceSpec {
                name: row.appliance,
                rated_power_watts: row.power_watts,
            });
        }
        let catalog = Self::from_specs(specs)?;
        tracing::debug!(appliances = catalog.len(), "appliance catalog parsed");
        Ok(catalog)
    }

    /// Loads a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the file cannot be opened or parsed.
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), appliances = catalog.len(), "loaded appliance catalog");
        Ok(catalog)
    }

    /// Returns the embedded reference catalog.
    pub fn builtin() -> Self {
        // The embedded table is static and covered by tests.
        Self::from_reader(BUILTIN_CSV.as_bytes()).unwrap_or_else(|e| {
            panic!("embedded appliance catalog is invalid: {e}");
        })
    }

    /// Looks up an appliance by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::UnknownAppliance`] if the name is not in the catalog.
    pub fn get(&self, name: &str) -> Result<&ApplianceSpec, AdvisorError> {
        self.index
            .get(name)
            .map(|&i| &self.specs[i])
            .ok_or_else(|| AdvisorError::UnknownAppliance(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Appliance names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApplianceSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = ApplianceCatalog::builtin();
        assert_eq!(catalog.len(), 23);
        assert_eq!(catalog.names().next(), Some("Refrigerator"));
        assert!(catalog.contains("Air Conditioner"));
    }

    #[test]
    fn builtin_matches_bundled_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/appliance_power_ratings.csv");
        let bundled = ApplianceCatalog::from_csv_path(&path).expect("bundled catalog should load");
        let builtin = ApplianceCatalog::builtin();
        assert_eq!(builtin.names().collect::<Vec<_>>(), bundled.names().collect::<Vec<_>>());
        assert_eq!(builtin.get("Water Heater").map(|s| s.rated_power_watts), Ok(3000.0));
    }

    #[test]
    fn lookup_resolves_power() {
        let catalog = ApplianceCatalog::builtin();
        let spec = catalog.get("Television").expect("television should exist");
        assert_eq!(spec.rated_power_watts, 120.0);
    }

    #[test]
    fn lookup_unknown_is_typed_error() {
        let catalog = ApplianceCatalog::builtin();
        let err = catalog.get("Flux Capacitor").unwrap_err();
        assert_eq!(err, AdvisorError::UnknownAppliance("Flux Capacitor".into()));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "Category,Appliance,Power (Watts),Notes\nKitchen,Toaster,800,two slots\n";
        let catalog = ApplianceCatalog::from_reader(csv.as_bytes()).expect("should parse");
        assert_eq!(catalog.get("Toaster").map(|s| s.rated_power_watts), Ok(800.0));
    }

    #[test]
    fn duplicate_names_rejected() {
        let csv = "Appliance,Power (Watts)\nFan,50\nFan,60\n";
        let err = ApplianceCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAppliance(ref n) if n == "Fan"));
    }

    #[test]
    fn non_positive_power_rejected() {
        let csv = "Appliance,Power (Watts)\nFan,0\n";
        let err = ApplianceCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPower { .. }));
    }

    #[test]
    fn missing_power_column_is_csv_error() {
        let csv = "Appliance,Watts\nFan,50\n";
        let err = ApplianceCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ApplianceCatalog::from_csv_path(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}

//! File import and export.

/// Usage table CSV export.
pub mod export;

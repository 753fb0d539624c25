//! Chart colours and share-of-total slices for distribution charts.
//!
//! Colours are assigned by row ordinal so a chart and its legend table
//! always agree, independent of the rendering backend.

use std::fmt;

use serde::{Serialize, Serializer};

/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ten-colour categorical palette (tab10).
pub const PALETTE: [Rgb; 10] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0x17, 0xbe, 0xcf),
];

/// Colour for the row at `index`, cycling through [`PALETTE`].
pub fn color_for(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// One labelled wedge of a distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub kwh: f64,
    /// Percentage of the summed kWh (0.0 when the total is zero).
    pub share_pct: f64,
    pub color: Rgb,
}

/// Builds chart slices from `(label, kWh)` rows, preserving row order.
pub fn distribution<'a, I>(rows: I) -> Vec<ChartSlice>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let rows: Vec<(&str, f64)> = rows.into_iter().collect();
    let total: f64 = rows.iter().map(|(_, kwh)| kwh).sum();

    rows.into_iter()
        .enumerate()
        .map(|(i, (label, kwh))| ChartSlice {
            label: label.to_string(),
            kwh,
            share_pct: if total > 0.0 { 100.0 * kwh / total } else { 0.0 },
            color: color_for(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(color_for(0), color_for(10));
        assert_ne!(color_for(0), color_for(1));
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(color_for(0).to_string(), "#1f77b4");
    }

    #[test]
    fn shares_sum_to_hundred() {
        let slices = distribution([("A", 30.0), ("B", 10.0), ("C", 60.0)]);
        let sum: f64 = slices.iter().map(|s| s.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((slices[2].share_pct - 60.0).abs() < 1e-9);
        assert_eq!(slices[1].color, color_for(1));
    }

    #[test]
    fn zero_total_has_zero_shares() {
        let slices = distribution([("A", 0.0), ("B", 0.0)]);
        assert!(slices.iter().all(|s| s.share_pct == 0.0));
    }
}

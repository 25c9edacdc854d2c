//! Report type definitions for the rendering model.
//!
//! This module defines the rows and column descriptors shared by every
//! renderer.

use serde::Serialize;
use std::fmt;

use crate::probability::PROBABILITY_DIGITS;

/// Probability truncated to `PROBABILITY_DIGITS` fractional digits.
///
/// Stored as whole units of 10^-5 so formatting never goes through a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Probability {
    units: u32,
}

impl Probability {
    const SCALE: u32 = 10u32.pow(PROBABILITY_DIGITS);

    pub fn from_units(units: u32) -> Self {
        Probability { units }
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.units) / f64::from(Self::SCALE)
    }

    /// Strictly greater than one half
    pub fn is_likely(&self) -> bool {
        self.units * 2 > Self::SCALE
    }

    /// Percent with two fractional digits and a trailing `%`, e.g. "50.73%".
    ///
    /// Rounds half up from the truncated value.
    pub fn percent(&self) -> String {
        // 10^-5 units are 10^-3 percent; drop one digit
        let hundredths = (self.units + 5) / 10;
        format!("{}.{:02}%", hundredths / 100, hundredths % 100)
    }
}

impl fmt::Display for Probability {
    /// Fixed-point with exactly five fractional digits, e.g. "0.50729"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:05}", self.units / Self::SCALE, self.units % Self::SCALE)
    }
}

impl Serialize for Probability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// One computed occupancy count
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub num_people: u32,
    pub probability: Probability,
    pub percent: String,
}

/// A single output row
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Data(DataRow),
    /// Stands in for a contiguous run of omitted counts
    Elided,
}

impl Row {
    pub fn is_elided(&self) -> bool {
        matches!(self, Row::Elided)
    }

    pub fn as_data(&self) -> Option<&DataRow> {
        match self {
            Row::Data(data) => Some(data),
            Row::Elided => None,
        }
    }
}

/// Column descriptor, used for the CSV header and the YAML `cols` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub tooltip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl Column {
    fn new(id: &str, name: &str, tooltip: &str, align: Option<&str>) -> Self {
        Column {
            id: id.to_string(),
            name: name.to_string(),
            tooltip: tooltip.to_string(),
            align: align.map(str::to_string),
        }
    }
}

/// The three fixed columns: num_people, probability, percent
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("num_people", "Number of People", "Number of people in the room.", None),
        Column::new(
            "probability",
            "Probability",
            "Probability that at least two people in the room share a birthday.",
            Some("right"),
        ),
        Column::new("percent", "Percent", "Probability as a percentage.", Some("right")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_likely_is_strictly_above_half() {
        assert!(!Probability::from_units(49999).is_likely());
        assert!(!Probability::from_units(50000).is_likely());
        assert!(Probability::from_units(50001).is_likely());
    }

    #[test]
    fn test_fixed_point_formatting() {
        let p = Probability::from_units(50000);
        assert_eq!(p.to_string(), "0.50000");
        assert_eq!(p.percent(), "50.00%");
        assert_eq!(Probability::from_units(100_000).to_string(), "1.00000");
        assert_eq!(Probability::from_units(5).percent(), "0.01%");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One year's observation for a crop series.
///
/// `None` marks a value the source reported as missing (`".."`); it is
/// distinct from an observed zero. The amount field is expected to be
/// unit-conflated before a `Record` is built (see
/// [`crate::series::conflate_amount`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    /// Harvest volume, 1 000 kg (1 000 pcs for potted crops).
    pub amount: Option<f64>,
    /// Number of producing companies.
    pub companies: Option<f64>,
    /// Greenhouse area in use, 1 000 m².
    pub area: Option<f64>,
}

/// One point of the shared auxiliary (yearly mean temperature) series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuxPoint {
    pub year: i32,
    pub value: f64,
}

/// The three comparable metrics a chart can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Amount,
    Companies,
    Area,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Amount, Dimension::Companies, Dimension::Area];

    /// Field accessor for this dimension.
    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            Dimension::Amount => record.amount,
            Dimension::Companies => record.companies,
            Dimension::Area => record.area,
        }
    }

    /// Y-axis unit wording; for amount this is the primary (mass) unit.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Amount => "1 000 kg",
            Dimension::Companies => "Companies",
            Dimension::Area => "1 000 m²",
        }
    }

    /// Alternate-unit wording, used for the amount of a potted crop.
    pub fn alt_label(self) -> &'static str {
        match self {
            Dimension::Amount => "1 000 pcs",
            other => other.label(),
        }
    }

    /// Wording for the overview axis, which mixes both amount units.
    pub fn overview_label(self) -> &'static str {
        match self {
            Dimension::Amount => "1 000 kg or 1 000 pcs",
            other => other.label(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Amount => "amount",
            Dimension::Companies => "companies",
            Dimension::Area => "area",
        };
        write!(f, "{name}")
    }
}

/// Inclusive year range shared by both chart surfaces. Fixed by
/// configuration, never derived from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn contains(self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    pub fn domain(self) -> (f64, f64) {
        (self.start as f64, self.end as f64)
    }
}

/// Fixed pixel geometry for the two chart surfaces, injected at
/// construction. There is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub overview_width: f64,
    pub overview_height: f64,
    pub detail_width: f64,
    pub detail_height: f64,
    /// Pixel band reserved at the top of the detail plot for axis labels.
    pub detail_offset: f64,
    /// Height of the temperature subchart under the detail plot.
    pub aux_height: f64,
    pub years: YearRange,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            overview_width: 640.0,
            overview_height: 420.0,
            detail_width: 420.0,
            detail_height: 280.0,
            detail_offset: 30.0,
            aux_height: 126.0,
            years: YearRange {
                start: 2014,
                end: 2023,
            },
        }
    }
}

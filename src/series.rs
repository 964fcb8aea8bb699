use crate::models::{AuxPoint, Dimension, Record};
use std::sync::Arc;

/// Name suffix marking crops sold by the piece instead of by mass.
pub const POTTED_SUFFIX: &str = "(potted)";

/// Precomputed `[min, max]` ranges of a series' defined values. A `None`
/// extent means the series has no data at all for that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesExtents {
    pub amount: Option<(f64, f64)>,
    pub companies: Option<(f64, f64)>,
    pub area: Option<(f64, f64)>,
    pub auxiliary: Option<(f64, f64)>,
}

/// Min/max over the defined values of one field, `None` if every value
/// is missing. Callers must treat `None` as "no data for this
/// dimension" and skip scale construction rather than build a
/// degenerate domain from it.
pub fn compute_extent<F>(records: &[Record], accessor: F) -> Option<(f64, f64)>
where
    F: Fn(&Record) -> Option<f64>,
{
    let mut extent: Option<(f64, f64)> = None;
    for v in records.iter().filter_map(|r| accessor(r)) {
        let e = extent.get_or_insert((v, v));
        e.0 = e.0.min(v);
        e.1 = e.1.max(v);
    }
    extent
}

/// Unit-conflation rule for the amount field: a missing mass value falls
/// back to the piece count of the same record. Idempotent, applied once
/// at load time.
pub fn conflate_amount(mass: Option<f64>, pieces: Option<f64>) -> Option<f64> {
    mass.or(pieces)
}

/// One named crop series: yearly records plus the temperature series
/// shared by all crops. Immutable after construction, so the extents
/// are computed exactly once, here.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    records: Vec<Record>,
    auxiliary: Arc<Vec<AuxPoint>>,
    extents: SeriesExtents,
}

impl Series {
    /// Records must hold one entry per year, years unique and ascending,
    /// with the amount field already conflated.
    pub fn new(name: impl Into<String>, records: Vec<Record>, auxiliary: Arc<Vec<AuxPoint>>) -> Self {
        let extents = SeriesExtents {
            amount: compute_extent(&records, |r| r.amount),
            companies: compute_extent(&records, |r| r.companies),
            area: compute_extent(&records, |r| r.area),
            auxiliary: auxiliary.iter().map(|p| p.value).fold(None, |acc, v| {
                let (lo, hi) = acc.unwrap_or((v, v));
                Some((lo.min(v), hi.max(v)))
            }),
        };
        Self {
            name: name.into(),
            records,
            auxiliary,
            extents,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn auxiliary(&self) -> &[AuxPoint] {
        &self.auxiliary
    }

    pub fn extents(&self) -> &SeriesExtents {
        &self.extents
    }

    pub fn extent(&self, dimension: Dimension) -> Option<(f64, f64)> {
        match dimension {
            Dimension::Amount => self.extents.amount,
            Dimension::Companies => self.extents.companies,
            Dimension::Area => self.extents.area,
        }
    }

    pub fn auxiliary_extent(&self) -> Option<(f64, f64)> {
        self.extents.auxiliary
    }

    /// Potted crops report amounts by the piece, which switches the
    /// amount axis wording in detail view.
    pub fn is_potted(&self) -> bool {
        self.name.ends_with(POTTED_SUFFIX)
    }

    /// First-year value used for draw ordering; a missing value orders
    /// as 0, matching the drawing fallback for missing values.
    pub fn first_year_value(&self, dimension: Dimension) -> f64 {
        self.records
            .first()
            .and_then(|r| dimension.value(r))
            .unwrap_or(0.0)
    }
}

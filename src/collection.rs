use crate::models::Dimension;
use crate::series::Series;

/// Combined `[min, max]` bounds over all member series, per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CombinedExtents {
    pub amount: Option<(f64, f64)>,
    pub companies: Option<(f64, f64)>,
    pub area: Option<(f64, f64)>,
}

/// Union of the members' non-empty extents for one dimension: min of
/// mins, max of maxes. `None` only when every member has no data for
/// the dimension; partial `None`s contribute nothing.
pub fn combine_extents(series: &[Series], dimension: Dimension) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for (lo, hi) in series.iter().filter_map(|s| s.extent(dimension)) {
        let e = extent.get_or_insert((lo, hi));
        e.0 = e.0.min(lo);
        e.1 = e.1.max(hi);
    }
    extent
}

/// Ordered set of series plus their combined extents. Membership is
/// fixed after construction; only the ordering changes, through
/// [`Collection::sort_by_dimension`].
#[derive(Debug, Clone)]
pub struct Collection {
    series: Vec<Series>,
    extents: CombinedExtents,
}

impl Collection {
    pub fn new(series: Vec<Series>) -> Self {
        let extents = CombinedExtents {
            amount: combine_extents(&series, Dimension::Amount),
            companies: combine_extents(&series, Dimension::Companies),
            area: combine_extents(&series, Dimension::Area),
        };
        Self { series, extents }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn extents(&self) -> &CombinedExtents {
        &self.extents
    }

    pub fn extent(&self, dimension: Dimension) -> Option<(f64, f64)> {
        match dimension {
            Dimension::Amount => self.extents.amount,
            Dimension::Companies => self.extents.companies,
            Dimension::Area => self.extents.area,
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Reorder so the series with the largest first-year value for the
    /// dimension comes first (largest-first draws in front in the
    /// layered overview). Stable: ties keep their prior relative order.
    pub fn sort_by_dimension(&mut self, dimension: Dimension) {
        self.series.sort_by(|a, b| {
            b.first_year_value(dimension)
                .total_cmp(&a.first_year_value(dimension))
        });
    }
}

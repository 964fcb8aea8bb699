//! Domain→pixel scale construction for both chart surfaces.
//!
//! Overview scales are extent-keyed and all exist at once; they only
//! need rebuilding when the member series set changes, not when the
//! active dimension switches. Detail scales come from a single selected
//! series' extents and are rebuilt per selection.

use crate::collection::CombinedExtents;
use crate::error::Error;
use crate::models::{ChartConfig, Dimension};
use crate::series::Series;

/// Exponent of the overview amount scale. Compresses multi-order-of-
/// magnitude harvest volumes so all series stay visually comparable; a
/// linear map is not an acceptable substitute.
pub const AMOUNT_EXPONENT: f64 = 0.4;

/// Fixed tick count of the auxiliary (temperature) axis.
pub const AUX_TICKS: usize = 4;

/// Linear domain→pixel map. A zero-width domain maps every input to the
/// midpoint of the range instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn map(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (v - self.d0) / span;
        self.r0 + t * (self.r1 - self.r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks((self.d0, self.d1), count)
    }
}

/// Power-law domain→pixel map: the exponent transform is applied to the
/// value and both domain endpoints, sign preserved, then interpolated
/// linearly into the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
    exponent: f64,
}

impl PowScale {
    pub fn new(domain: (f64, f64), range: (f64, f64), exponent: f64) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
            exponent,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn map(&self, v: f64) -> f64 {
        let t0 = pow_transform(self.d0, self.exponent);
        let t1 = pow_transform(self.d1, self.exponent);
        let span = t1 - t0;
        if span == 0.0 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (pow_transform(v, self.exponent) - t0) / span;
        self.r0 + t * (self.r1 - self.r0)
    }

    /// Tick values are chosen in the untransformed domain, like d3's
    /// power scales.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks((self.d0, self.d1), count)
    }
}

fn pow_transform(v: f64, exponent: f64) -> f64 {
    v.signum() * v.abs().powf(exponent)
}

/// Either scale shape behind a single `map` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Pow(PowScale),
}

impl Scale {
    pub fn map(&self, v: f64) -> f64 {
        match self {
            Scale::Linear(s) => s.map(v),
            Scale::Pow(s) => s.map(v),
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Scale::Linear(s) => s.ticks(count),
            Scale::Pow(s) => s.ticks(count),
        }
    }
}

/// Roughly `count` nicely rounded tick values across the domain.
pub fn ticks((a, b): (f64, f64), count: usize) -> Vec<f64> {
    if count == 0 || !a.is_finite() || !b.is_finite() {
        return Vec::new();
    }
    if a == b {
        return vec![a];
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let step = tick_step(lo, hi, count);
    if step <= 0.0 || !step.is_finite() {
        return vec![lo];
    }
    let start = (lo / step).ceil() as i64;
    let stop = (hi / step).floor() as i64;
    (start..=stop).map(|i| i as f64 * step).collect()
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    power
        * if err >= 50f64.sqrt() {
            10.0
        } else if err >= 10f64.sqrt() {
            5.0
        } else if err >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        }
}

/// Exactly `count` evenly spaced values across the domain, endpoints
/// included. Used for the fixed-count auxiliary axis.
pub fn even_ticks((a, b): (f64, f64), count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![a];
    }
    (0..count)
        .map(|i| a + (b - a) * i as f64 / (count - 1) as f64)
        .collect()
}

/// Overview scales: the shared year axis plus one y scale per dimension.
/// Ranges are inverted (max domain → 0 px) so larger values plot
/// higher. A dimension whose combined extent is empty gets no scale;
/// asking for it signals [`Error::NoData`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    year: LinearScale,
    amount: Option<Scale>,
    companies: Option<Scale>,
    area: Option<Scale>,
}

impl ScaleSet {
    pub fn new(extents: &CombinedExtents, config: &ChartConfig) -> Self {
        let h = config.overview_height;
        Self {
            year: LinearScale::new(config.years.domain(), (0.0, config.overview_width)),
            amount: extents
                .amount
                .map(|d| Scale::Pow(PowScale::new(d, (h, 0.0), AMOUNT_EXPONENT))),
            companies: extents
                .companies
                .map(|d| Scale::Linear(LinearScale::new(d, (h, 0.0)))),
            area: extents
                .area
                .map(|d| Scale::Linear(LinearScale::new(d, (h, 0.0)))),
        }
    }

    pub fn year(&self) -> &LinearScale {
        &self.year
    }

    pub fn dimension(&self, dimension: Dimension) -> Result<&Scale, Error> {
        let scale = match dimension {
            Dimension::Amount => &self.amount,
            Dimension::Companies => &self.companies,
            Dimension::Area => &self.area,
        };
        scale.as_ref().ok_or(Error::NoData(dimension))
    }
}

/// Detail-view scales, built from a single selected series' extents
/// rather than the collection's. The y range reserves `detail_offset`
/// pixels of label space at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub aux: Option<LinearScale>,
}

impl DetailScales {
    pub fn new(series: &Series, dimension: Dimension, config: &ChartConfig) -> Result<Self, Error> {
        let domain = series.extent(dimension).ok_or(Error::NoData(dimension))?;
        Ok(Self {
            x: LinearScale::new(
                config.years.domain(),
                (0.0, config.detail_width - config.detail_offset),
            ),
            y: LinearScale::new(domain, (config.detail_height, config.detail_offset)),
            aux: series
                .auxiliary_extent()
                .map(|d| LinearScale::new(d, (config.aux_height, 0.0))),
        })
    }
}

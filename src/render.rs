//! Render-instruction assembly: the payload a drawing surface needs for
//! one redraw. The core never issues drawing commands; it hands over
//! pixel geometry, tick sets, and label text and stays
//! drawing-library-agnostic.

use crate::collection::Collection;
use crate::error::Error;
use crate::models::{ChartConfig, Dimension};
use crate::scale::{AUX_TICKS, DetailScales, ScaleSet, even_ticks};
use crate::series::Series;
use crate::view::ViewState;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// One axis tick: domain value, pixel position, label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub px: f64,
    pub label: String,
}

/// Axis wording: `primary` is the y unit, `secondary` the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub primary: String,
    pub secondary: String,
}

/// Closed silhouette of one overview layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerShape {
    pub name: String,
    /// Position in draw order; the surface offsets each layer by depth
    /// to get the stacked look.
    pub depth: usize,
    pub selected: bool,
    /// Pixel outline: the data polyline plus the two baseline corners.
    pub outline: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewScene {
    pub width: f64,
    pub height: f64,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub labels: AxisLabels,
    /// Layers in draw order, front-most first.
    pub layers: Vec<LayerShape>,
}

/// Temperature subchart under the detail plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxScene {
    pub height: f64,
    pub path: Vec<(f64, f64)>,
    pub ticks: Vec<Tick>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailScene {
    pub series: String,
    pub width: f64,
    pub height: f64,
    pub offset: f64,
    pub outline: Vec<(f64, f64)>,
    /// X pixel positions of the per-year gridlines.
    pub year_lines: Vec<f64>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub labels: AxisLabels,
    pub auxiliary: Option<AuxScene>,
}

/// Everything the drawing surface needs for one redraw, computed from
/// fully settled state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub dimension: Dimension,
    pub selected: Option<String>,
    pub auxiliary_visible: bool,
    pub overview: OverviewScene,
    pub detail: Option<DetailScene>,
}

/// Thousands-separated tick label; decimals only for small magnitudes.
pub fn format_tick(v: f64) -> String {
    if v.abs() >= 1000.0 {
        (v.round() as i64).to_formatted_string(&Locale::en)
    } else if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

pub(crate) fn build(
    collection: &Collection,
    view: &ViewState,
    scales: &ScaleSet,
    config: &ChartConfig,
) -> Result<RenderInstruction, Error> {
    let dimension = view.active_dimension;
    let y_scale = scales.dimension(dimension)?;
    let year = scales.year();

    let layers = collection
        .series()
        .iter()
        .enumerate()
        .map(|(depth, s)| {
            let mut outline: Vec<(f64, f64)> = s
                .records()
                .iter()
                .map(|r| {
                    // missing values draw at 0, per the load-time fallback
                    let v = dimension.value(r).unwrap_or(0.0);
                    (year.map(r.year as f64), y_scale.map(v))
                })
                .collect();
            outline.push((config.overview_width, config.overview_height));
            outline.push((0.0, config.overview_height));
            LayerShape {
                name: s.name().to_string(),
                depth,
                selected: view.selected.as_deref() == Some(s.name()),
                outline,
            }
        })
        .collect();

    let x_ticks = (config.years.start..=config.years.end)
        .map(|y| Tick {
            value: y as f64,
            px: year.map(y as f64),
            label: y.to_string(),
        })
        .collect();
    let y_ticks = y_scale
        .ticks(10)
        .into_iter()
        .map(|v| Tick {
            value: v,
            px: y_scale.map(v),
            label: format_tick(v),
        })
        .collect();

    let overview = OverviewScene {
        width: config.overview_width,
        height: config.overview_height,
        x_ticks,
        y_ticks,
        labels: AxisLabels {
            primary: dimension.overview_label().to_string(),
            secondary: "Year".to_string(),
        },
        layers,
    };

    let detail = match view.selected.as_deref() {
        Some(name) => {
            let series = collection
                .get(name)
                .ok_or_else(|| Error::UnknownSeries(name.to_string()))?;
            Some(build_detail(
                series,
                dimension,
                view.auxiliary_visible,
                config,
            )?)
        }
        None => None,
    };

    Ok(RenderInstruction {
        dimension,
        selected: view.selected.clone(),
        auxiliary_visible: view.auxiliary_visible,
        overview,
        detail,
    })
}

fn build_detail(
    series: &Series,
    dimension: Dimension,
    auxiliary_visible: bool,
    config: &ChartConfig,
) -> Result<DetailScene, Error> {
    let scales = DetailScales::new(series, dimension, config)?;
    let width = config.detail_width - config.detail_offset;

    let mut outline: Vec<(f64, f64)> = series
        .records()
        .iter()
        .map(|r| {
            let v = dimension.value(r).unwrap_or(0.0);
            (scales.x.map(r.year as f64), scales.y.map(v))
        })
        .collect();
    if let Some(&(last_x, _)) = outline.last() {
        outline.push((last_x, config.detail_height));
        outline.push((0.0, config.detail_height));
    }

    let year_lines = series
        .records()
        .iter()
        .map(|r| scales.x.map(r.year as f64))
        .collect();

    let x_ticks = (config.years.start..=config.years.end)
        .map(|y| Tick {
            value: y as f64,
            px: scales.x.map(y as f64),
            label: y.to_string(),
        })
        .collect();
    let y_ticks = scales
        .y
        .ticks(6)
        .into_iter()
        .map(|v| Tick {
            value: v,
            px: scales.y.map(v),
            label: format_tick(v),
        })
        .collect();

    let primary = if dimension == Dimension::Amount && series.is_potted() {
        dimension.alt_label()
    } else {
        dimension.label()
    };

    let auxiliary = if auxiliary_visible {
        scales.aux.map(|aux| AuxScene {
            height: config.aux_height,
            path: series
                .auxiliary()
                .iter()
                .map(|p| (scales.x.map(p.year as f64), aux.map(p.value)))
                .collect(),
            ticks: even_ticks(aux.domain(), AUX_TICKS)
                .into_iter()
                .map(|v| Tick {
                    value: v,
                    px: aux.map(v),
                    label: format!("{v:.1}"),
                })
                .collect(),
            label: "°C".to_string(),
        })
    } else {
        None
    };

    Ok(DetailScene {
        series: series.name().to_string(),
        width,
        height: config.detail_height,
        offset: config.detail_offset,
        outline,
        year_lines,
        x_ticks,
        y_ticks,
        labels: AxisLabels {
            primary: primary.to_string(),
            secondary: "Year".to_string(),
        },
        auxiliary,
    })
}

//! Drawing surface: renders a [`RenderInstruction`] to SVG. All styling
//! (colors, offsets, fonts) lives here; the core only hands over pixel
//! geometry, tick sets, and label text. SVG keeps text as text, so no
//! font rasterization is involved.

pub mod util;

use crate::render::{AuxScene, DetailScene, OverviewScene, RenderInstruction};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::element::{PathElement, Polygon, Text};
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;

use util::{aux_stroke, detail_fill, layer_green};

const MARGIN: i32 = 40;
/// Per-depth pixel shift of the overview layers (the stacked look).
const DEPTH_SHIFT: i32 = 10;
/// Horizontal gap between the overview and the detail panel.
const PANEL_GAP: i32 = 80;
/// Vertical gap between the detail plot and the temperature subchart.
const AUX_GAP: i32 = 40;
const TICK_LEN: i32 = 5;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn label_font() -> TextStyle<'static> {
    ("sans-serif", 12).into_font().into()
}

/// Render one instruction to an SVG file. The overview sits at the
/// left; the detail panel, when present, to its right.
pub fn render_svg<P: AsRef<Path>>(
    instruction: &RenderInstruction,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    draw_overview(&root, &instruction.overview)?;
    if let Some(detail) = &instruction.detail {
        let x0 = MARGIN + instruction.overview.width as i32 + PANEL_GAP;
        draw_detail(&root, detail, x0)?;
    }

    root.present().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_overview(root: &Area<'_>, scene: &OverviewScene) -> Result<()> {
    // layers in draw order; each one shifted down-right by its depth
    for layer in &scene.layers {
        let shift = (layer.depth as i32 + 1) * DEPTH_SHIFT;
        let points: Vec<(i32, i32)> = layer
            .outline
            .iter()
            .map(|&(x, y)| (MARGIN + x as i32 + shift, MARGIN + y as i32 + shift))
            .collect();
        root.draw(&Polygon::new(
            points.clone(),
            layer_green(layer.depth).filled(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if layer.selected {
            root.draw(&PathElement::new(points, BLACK.stroke_width(2)))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
    }

    // year axis on top
    for tick in &scene.x_ticks {
        let x = MARGIN + tick.px as i32;
        root.draw(&PathElement::new(
            vec![(x, MARGIN - TICK_LEN), (x, MARGIN)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        root.draw(&Text::new(
            tick.label.clone(),
            (x - 12, MARGIN - 20),
            label_font(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    // value axis on the left
    for tick in &scene.y_ticks {
        let y = MARGIN + tick.px as i32;
        root.draw(&PathElement::new(
            vec![(MARGIN - TICK_LEN, y), (MARGIN, y)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        root.draw(&Text::new(tick.label.clone(), (2, y - 6), label_font()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    root.draw(&Text::new(
        scene.labels.primary.clone(),
        (4, MARGIN + scene.height as i32 + 16),
        label_font(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    root.draw(&Text::new(
        scene.labels.secondary.clone(),
        (MARGIN + scene.width as i32 + 12, MARGIN - 20),
        label_font(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_detail(root: &Area<'_>, scene: &DetailScene, x0: i32) -> Result<()> {
    // series name header
    root.draw(&Text::new(
        scene.series.clone(),
        (x0, MARGIN - 24),
        ("sans-serif", 16).into_font(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // per-year gridlines, extended over the subchart when it is shown
    let lines_bottom = match &scene.auxiliary {
        Some(aux) => MARGIN + scene.height as i32 + AUX_GAP + aux.height as i32,
        None => MARGIN + scene.height as i32,
    };
    for &x in &scene.year_lines {
        let x = x0 + x as i32;
        root.draw(&PathElement::new(
            vec![(x, MARGIN + scene.offset as i32), (x, lines_bottom)],
            RGBColor(210, 210, 210).stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let points: Vec<(i32, i32)> = scene
        .outline
        .iter()
        .map(|&(x, y)| (x0 + x as i32, MARGIN + y as i32))
        .collect();
    root.draw(&Polygon::new(points, detail_fill().filled()))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    for tick in &scene.x_ticks {
        let x = x0 + tick.px as i32;
        let y = MARGIN + scene.height as i32;
        root.draw(&PathElement::new(
            vec![(x, y), (x, y + TICK_LEN)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        root.draw(&Text::new(tick.label.clone(), (x - 12, y + 8), label_font()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    for tick in &scene.y_ticks {
        let y = MARGIN + tick.px as i32;
        root.draw(&PathElement::new(
            vec![(x0 - TICK_LEN, y), (x0, y)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        root.draw(&Text::new(tick.label.clone(), (x0 - 40, y - 6), label_font()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    root.draw(&Text::new(
        scene.labels.primary.clone(),
        (x0 - 8, MARGIN + scene.offset as i32 - 16),
        label_font(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    root.draw(&Text::new(
        scene.labels.secondary.clone(),
        (x0 + scene.width as i32 + 8, MARGIN + scene.height as i32 + 8),
        label_font(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    if let Some(aux) = &scene.auxiliary {
        draw_auxiliary(root, aux, x0, MARGIN + scene.height as i32 + AUX_GAP)?;
    }
    Ok(())
}

fn draw_auxiliary(root: &Area<'_>, scene: &AuxScene, x0: i32, y0: i32) -> Result<()> {
    let points: Vec<(i32, i32)> = scene
        .path
        .iter()
        .map(|&(x, y)| (x0 + x as i32, y0 + y as i32))
        .collect();
    root.draw(&PathElement::new(points, aux_stroke().stroke_width(2)))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    for tick in &scene.ticks {
        let y = y0 + tick.px as i32;
        root.draw(&PathElement::new(
            vec![(x0 - TICK_LEN, y), (x0, y)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        root.draw(&Text::new(tick.label.clone(), (x0 - 36, y - 6), label_font()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    root.draw(&Text::new(
        scene.label.clone(),
        (x0 - 8, y0 - 16),
        label_font(),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

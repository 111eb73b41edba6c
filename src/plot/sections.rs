//! Time-section grids for evolution solutions
//!
//! An evolution solution u(x, t) or u(x, y, t) cannot be drawn as one
//! static picture. These functions fix a handful of timestamps, solve
//! the model once per timestamp with time appended as the last grid
//! coordinate, and arrange the resulting snapshots on a sub-plot grid.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pdeplot::plot::{plot_sections_1d, plot_sections_2d, FieldSectionsConfig, FieldMode};
//!
//! // u(x, t): six line sections on a 2x3 grid
//! plot_sections_1d(&model, "sections.png", None)?;
//!
//! // u(x, y, t): surface snapshots
//! plot_sections_2d(&model, "sections_3d.png", None)?;
//!
//! // ... or heatmap snapshots sharing one color scale
//! let config = FieldSectionsConfig::with_mode(FieldMode::Heatmap);
//! plot_sections_2d(&model, "sections_2d.png", Some(&config))?;
//! ```

use nalgebra::{DMatrix, DVector};
use plotters::prelude::*;
use std::error::Error;

use super::config::{FieldMode, FieldSectionsConfig, LineSectionsConfig};
use super::field::{render_planar_section, render_surface_section};
use super::{check_axis, padded_range, solve_checked, value_extent, PlotError};
use crate::grid::{append_column, cart_prod, linspace};
use crate::model::TrainedModel;

// =================================================================================================
// 1+1D sections (line plots)
// =================================================================================================

/// Plot time sections of a 1+1D evolution solution u(x, t).
///
/// For each configured timestamp the spatial points get the timestamp
/// appended as a second coordinate column, the model is solved on that
/// grid, and the section is drawn as a line plot in its own sub-plot
/// panel. All panels share the configured value-axis range so sections
/// are visually comparable.
///
/// # Arguments
///
/// * `model`       — trained approximator over (x, t)
/// * `output_path` — output file path (`.svg` → vector, else bitmap)
/// * `config`      — optional configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the timestamps do not fit the sub-plot grid, the
/// model fails on any section, or the backend cannot write the file.
pub fn plot_sections_1d<M: TrainedModel>(
    model: &M,
    output_path: &str,
    config: Option<&LineSectionsConfig>,
) -> Result<(), PlotError> {
    let default_config = LineSectionsConfig::default();
    let config = config.unwrap_or(&default_config);

    let (rows, cols) = config.grid_size;
    check_layout(config.timestamps.len(), rows, cols)?;

    let points = match &config.points {
        Some(points) => points.clone(),
        None => {
            let axis = linspace(config.xlim.0, config.xlim.1, 100);
            DMatrix::from_column_slice(axis.len(), 1, axis.as_slice())
        }
    };
    if points.ncols() != 1 {
        return Err(PlotError::GridArity {
            expected: 1,
            actual: points.ncols(),
        });
    }

    let xs: DVector<f64> = points.column(0).into_owned();

    // One solve per timestamp; time is the trailing coordinate.
    let mut sections = Vec::with_capacity(config.timestamps.len());
    for &t in &config.timestamps {
        let grid = append_column(&points, t);
        let values = solve_checked(model, &grid, config.fetches.as_deref())?;
        sections.push((t, values));
    }

    let size = canvas_size(config.panel_size, rows, cols);
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, size);
            plot_sections_1d_impl(backend, &xs, &sections, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, size);
            plot_sections_1d_impl(backend, &xs, &sections, config)
        }
    }
    .map_err(PlotError::render)
}

fn plot_sections_1d_impl<DB: DrawingBackend>(
    backend: DB,
    xs: &DVector<f64>,
    sections: &[(f64, DVector<f64>)],
    config: &LineSectionsConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;
    let root = root.titled(&config.title, ("sans-serif", 30))?;

    let (rows, cols) = config.grid_size;
    let panels = root.split_evenly((rows, cols));

    let (x_min, x_max) = value_extent(xs.iter());
    let y_range = section_range(config.value_lim);

    for ((t, values), panel) in sections.iter().zip(panels.iter()) {
        let mut chart = ChartBuilder::on(panel)
            .caption(format!("t = {:.2}", t), ("sans-serif", 20).into_font())
            .margin(8)
            .x_label_area_size(28)
            .y_label_area_size(40)
            .build_cartesian_2d(padded_range(x_min, x_max), y_range.clone())?;

        chart
            .configure_mesh()
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;

        chart.draw_series(LineSeries::new(
            xs.iter().zip(values.iter()).map(|(&x, &u)| (x, u)),
            ShapeStyle::from(&config.line_color).stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// 2+1D sections (field snapshots)
// =================================================================================================

/// Plot time sections of a 2+1D evolution solution u(x, y, t).
///
/// The spatial grid is the cartesian product of uniform x and y axes;
/// for each timestamp the time value is appended as the third grid
/// column and the model is solved once. Each snapshot is rendered in
/// the configured [`FieldMode`], and all snapshots share one color
/// normalization computed over every section, so color means the same
/// value in every panel.
///
/// # Arguments
///
/// * `model`       — trained approximator over (x, y, t)
/// * `output_path` — output file path (`.svg` → vector, else bitmap)
/// * `config`      — optional configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the timestamps do not fit the sub-plot grid, the
/// model fails on any section, or the backend cannot write the file.
pub fn plot_sections_2d<M: TrainedModel>(
    model: &M,
    output_path: &str,
    config: Option<&FieldSectionsConfig>,
) -> Result<(), PlotError> {
    let default_config = FieldSectionsConfig::default();
    let config = config.unwrap_or(&default_config);

    let (rows, cols) = config.grid_size;
    check_layout(config.timestamps.len(), rows, cols)?;

    let n = config.resolution();
    check_axis(n)?;
    let xs = linspace(config.xlim.0, config.xlim.1, n);
    let ys = linspace(config.ylim.0, config.ylim.1, n);
    let spatial = cart_prod(&[xs.as_slice(), ys.as_slice()]);

    let mut sections = Vec::with_capacity(config.timestamps.len());
    for &t in &config.timestamps {
        let grid = append_column(&spatial, t);
        let values = solve_checked(model, &grid, config.fetches.as_deref())?;
        let field = DMatrix::from_fn(xs.len(), ys.len(), |ix, iy| values[ix * ys.len() + iy]);
        sections.push((t, field));
    }

    // Shared color scale across every section.
    let extent = value_extent(sections.iter().flat_map(|(_, field)| field.iter()));

    let size = canvas_size(config.panel_size, rows, cols);
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, size);
            plot_sections_2d_impl(backend, &xs, &ys, &sections, config, extent)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, size);
            plot_sections_2d_impl(backend, &xs, &ys, &sections, config, extent)
        }
    }
    .map_err(PlotError::render)
}

fn plot_sections_2d_impl<DB: DrawingBackend>(
    backend: DB,
    xs: &DVector<f64>,
    ys: &DVector<f64>,
    sections: &[(f64, DMatrix<f64>)],
    config: &FieldSectionsConfig,
    extent: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;
    let root = root.titled(&config.title, ("sans-serif", 30))?;

    let (rows, cols) = config.grid_size;
    let panels = root.split_evenly((rows, cols));

    for ((t, field), panel) in sections.iter().zip(panels.iter()) {
        let caption = format!("t = {:.2}", t);
        match config.mode {
            FieldMode::Surface => {
                render_surface_section(
                    panel,
                    Some(&caption),
                    xs,
                    ys,
                    field,
                    config.colormap,
                    section_range(config.value_lim),
                    extent,
                )?;
            }
            FieldMode::Heatmap | FieldMode::Contour => {
                let bands = match config.mode {
                    FieldMode::Contour => Some(config.levels.max(2)),
                    _ => None,
                };
                render_planar_section(
                    panel,
                    Some(&caption),
                    xs,
                    ys,
                    field,
                    config.colormap,
                    bands,
                    extent,
                )?;
            }
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Helpers
// =================================================================================================

fn check_layout(sections: usize, rows: usize, cols: usize) -> Result<(), PlotError> {
    let capacity = rows * cols;
    if sections == 0 {
        return Err(PlotError::EmptyGrid);
    }
    if sections > capacity {
        return Err(PlotError::SectionLayout { sections, capacity });
    }
    Ok(())
}

/// Full canvas size: panels plus a title band on top.
fn canvas_size((panel_w, panel_h): (u32, u32), rows: usize, cols: usize) -> (u32, u32) {
    (panel_w * cols as u32, panel_h * rows as u32 + 40)
}

/// Fixed value range shared by all sections, widened when degenerate.
fn section_range((lo, hi): (f64, f64)) -> std::ops::Range<f64> {
    if !(hi - lo).is_finite() || (hi - lo).abs() < 1e-12 {
        padded_range(lo, hi)
    } else {
        lo..hi
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Training-loss curve

use plotters::prelude::*;
use std::error::Error;

use super::config::LossPlotConfig;
use super::{padded_range, value_extent, PlotError};

/// Plot a training-loss history against the iteration number.
///
/// # Arguments
///
/// * `loss_history` — loss value per training iteration, in order
/// * `output_path`  — output file path (`.svg` → vector, else bitmap)
/// * `config`       — optional configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the history is empty or the backend cannot write
/// to `output_path`.
pub fn plot_loss(
    loss_history: &[f64],
    output_path: &str,
    config: Option<&LossPlotConfig>,
) -> Result<(), PlotError> {
    let default_config = LossPlotConfig::default();
    let config = config.unwrap_or(&default_config);

    if loss_history.is_empty() {
        return Err(PlotError::EmptyGrid);
    }

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_loss_impl(backend, loss_history, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_loss_impl(backend, loss_history, config)
        }
    }
    .map_err(PlotError::render)
}

fn plot_loss_impl<DB: DrawingBackend>(
    backend: DB,
    loss_history: &[f64],
    config: &LossPlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let (y_min, y_max) = value_extent(loss_history.iter());

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 34).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..loss_history.len() as f64, padded_range(y_min, y_max))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        loss_history
            .iter()
            .enumerate()
            .map(|(i, &loss)| (i as f64, loss)),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

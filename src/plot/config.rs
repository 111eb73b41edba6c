//! Plot configuration shared across the chart functions
//!
//! One configuration struct per chart type, with public fields and
//! documented defaults. Every plotting function accepts
//! `Option<&Config>`; `None` means the defaults.

use nalgebra::{DMatrix, DVector};
use plotters::prelude::*;
use std::str::FromStr;

use super::colormap::ColorMap;
use super::PlotError;

// =================================================================================================
// Render mode
// =================================================================================================

/// How a 2D field is rendered.
///
/// A closed enum: an unrecognized mode cannot reach the renderers.
/// String input (e.g. from a notebook cell or CLI flag) goes through
/// [`FromStr`], which rejects unknown names with
/// [`PlotError::UnknownMode`] instead of silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    /// One filled cell per grid point, colormapped (default).
    #[default]
    Heatmap,

    /// Filled contour bands: values quantized to discrete levels.
    Contour,

    /// 3D surface view.
    Surface,
}

impl FieldMode {
    /// Per-axis grid resolution used when the caller does not set one.
    ///
    /// The surface view draws one quad per cell and stays readable (and
    /// fast) at a much coarser resolution than the planar modes.
    pub fn default_num_points(&self) -> usize {
        match self {
            FieldMode::Heatmap | FieldMode::Contour => 80,
            FieldMode::Surface => 20,
        }
    }
}

impl FromStr for FieldMode {
    type Err = PlotError;

    /// Accepts the canonical names plus the matplotlib-style aliases
    /// `imshow`, `contourf` and `3d_view`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heatmap" | "imshow" => Ok(FieldMode::Heatmap),
            "contour" | "contourf" => Ok(FieldMode::Contour),
            "surface" | "3d_view" => Ok(FieldMode::Surface),
            other => Err(PlotError::UnknownMode(other.to_string())),
        }
    }
}

// =================================================================================================
// Legend position
// =================================================================================================

/// Where the legend box is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

impl LegendPosition {
    pub(crate) fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        }
    }
}

// =================================================================================================
// 1D pairing plot
// =================================================================================================

/// Configuration for [`plot_pair_1d`](super::plot_pair_1d).
#[derive(Clone)]
pub struct PairPlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Solution against approximation")
    pub title: String,

    /// X-axis label (default: "t")
    pub xlabel: String,

    /// Y-axis label (default: "u")
    pub ylabel: String,

    /// Evaluation points, one row per point. `None` uses 200 uniform
    /// points on `[0, 1]` as a single-column grid.
    pub points: Option<DMatrix<f64>>,

    /// Which coordinate column drives the x axis (default: column 0).
    ///
    /// Only meaningful with a supplied multi-column `points` grid.
    pub plot_coord: Option<usize>,

    /// Half-width of the confidence band drawn around the true curve,
    /// or `None` for no band (default: None).
    pub confidence: Option<f64>,

    /// Opacity of the confidence band fill (default: 0.4)
    pub band_opacity: f64,

    /// Color of the true-solution curve (default: BLUE)
    pub true_color: RGBColor,

    /// Color of the approximation curve (default: RED)
    pub approx_color: RGBColor,

    /// Line thickness in pixels (default: 3)
    pub line_width: u32,

    /// Legend placement (default: upper right)
    pub legend: LegendPosition,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for PairPlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Solution against approximation".to_string(),
            xlabel: "t".to_string(),
            ylabel: "u".to_string(),
            points: None,
            plot_coord: None,
            confidence: None,
            band_opacity: 0.4,
            true_color: BLUE,
            approx_color: RED,
            line_width: 3,
            legend: LegendPosition::UpperRight,
            show_grid: true,
            background: WHITE,
        }
    }
}

impl PairPlotConfig {
    /// Config with a confidence band of half-width `confidence`.
    pub fn with_confidence(confidence: f64) -> Self {
        Self {
            confidence: Some(confidence),
            ..Default::default()
        }
    }

    /// Config with explicit evaluation points.
    pub fn with_points(points: DMatrix<f64>) -> Self {
        Self {
            points: Some(points),
            ..Default::default()
        }
    }
}

// =================================================================================================
// 2D field plot
// =================================================================================================

/// Configuration for [`plot_field_2d`](super::plot_field_2d).
#[derive(Clone)]
pub struct FieldPlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Approximate solution")
    pub title: String,

    /// Render mode (default: heatmap)
    pub mode: FieldMode,

    /// Opaque selector forwarded to the model's solve call (default: None)
    pub fetches: Option<String>,

    /// Explicit x-axis sample positions; overrides `xlim`/`num_points`.
    pub xs: Option<DVector<f64>>,

    /// Explicit y-axis sample positions; overrides `ylim`/`num_points`.
    pub ys: Option<DVector<f64>>,

    /// X-axis extent when building the grid (default: (0, 1))
    pub xlim: (f64, f64),

    /// Y-axis extent when building the grid (default: (0, 1))
    pub ylim: (f64, f64),

    /// Points per axis; `None` uses the mode default
    /// (80 for heatmap/contour, 20 for surface).
    pub num_points: Option<usize>,

    /// Color ramp (default: viridis)
    pub colormap: ColorMap,

    /// Number of filled contour bands in contour mode (default: 10)
    pub levels: usize,

    /// Draw a colorbar strip next to the planar modes (default: true)
    pub show_colorbar: bool,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for FieldPlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Approximate solution".to_string(),
            mode: FieldMode::Heatmap,
            fetches: None,
            xs: None,
            ys: None,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            num_points: None,
            colormap: ColorMap::Viridis,
            levels: 10,
            show_colorbar: true,
            background: WHITE,
        }
    }
}

impl FieldPlotConfig {
    /// Heatmap config (the default mode, spelled out).
    pub fn heatmap() -> Self {
        Self::default()
    }

    /// Filled-contour config.
    pub fn contour() -> Self {
        Self {
            mode: FieldMode::Contour,
            ..Default::default()
        }
    }

    /// 3D-surface config.
    pub fn surface() -> Self {
        Self {
            mode: FieldMode::Surface,
            ..Default::default()
        }
    }

    /// Resolved per-axis resolution for the configured mode.
    pub(crate) fn resolution(&self) -> usize {
        self.num_points.unwrap_or_else(|| self.mode.default_num_points())
    }
}

// =================================================================================================
// Time-section plots
// =================================================================================================

/// Default timestamps at which evolution solutions are sectioned.
pub(crate) const DEFAULT_TIMESTAMPS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.7, 0.9];

/// Configuration for [`plot_sections_1d`](super::plot_sections_1d)
/// (one spatial coordinate plus time).
#[derive(Clone)]
pub struct LineSectionsConfig {
    /// Size of each sub-plot panel in pixels (default: (420, 360))
    pub panel_size: (u32, u32),

    /// Figure title (default: "Evolution solution, time sections")
    pub title: String,

    /// Timestamps to section at (default: [0, 0.2, 0.4, 0.6, 0.7, 0.9])
    pub timestamps: Vec<f64>,

    /// Sub-plot arrangement as (rows, columns) (default: (2, 3))
    pub grid_size: (usize, usize),

    /// Opaque selector forwarded to the model's solve call (default: None)
    pub fetches: Option<String>,

    /// Spatial evaluation points as a single-column grid. `None` uses
    /// 100 uniform points on `xlim`.
    pub points: Option<DMatrix<f64>>,

    /// Spatial extent (default: (0, 1))
    pub xlim: (f64, f64),

    /// Shared value-axis range for all sections (default: (0, 0.3))
    pub value_lim: (f64, f64),

    /// Curve color (default: BLUE)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for LineSectionsConfig {
    fn default() -> Self {
        Self {
            panel_size: (420, 360),
            title: "Evolution solution, time sections".to_string(),
            timestamps: DEFAULT_TIMESTAMPS.to_vec(),
            grid_size: (2, 3),
            fetches: None,
            points: None,
            xlim: (0.0, 1.0),
            value_lim: (0.0, 0.3),
            line_color: BLUE,
            background: WHITE,
        }
    }
}

impl LineSectionsConfig {
    /// Config sectioning at the given timestamps, arranged on one row.
    pub fn at_timestamps(timestamps: Vec<f64>) -> Self {
        let columns = timestamps.len().max(1);
        Self {
            grid_size: (1, columns),
            timestamps,
            ..Default::default()
        }
    }
}

/// Configuration for [`plot_sections_2d`](super::plot_sections_2d)
/// (two spatial coordinates plus time).
#[derive(Clone)]
pub struct FieldSectionsConfig {
    /// Size of each sub-plot panel in pixels (default: (420, 360))
    pub panel_size: (u32, u32),

    /// Figure title (default: "Evolution solution, time sections")
    pub title: String,

    /// Timestamps to section at (default: [0, 0.2, 0.4, 0.6, 0.7, 0.9])
    pub timestamps: Vec<f64>,

    /// Sub-plot arrangement as (rows, columns) (default: (2, 3))
    pub grid_size: (usize, usize),

    /// Render mode for each section (default: surface)
    pub mode: FieldMode,

    /// Opaque selector forwarded to the model's solve call (default: None)
    pub fetches: Option<String>,

    /// X-axis extent (default: (0, 1))
    pub xlim: (f64, f64),

    /// Y-axis extent (default: (0, 1))
    pub ylim: (f64, f64),

    /// Shared value-axis range for surface sections (default: (-0.2, 0.2))
    pub value_lim: (f64, f64),

    /// Points per spatial axis; `None` uses the mode default.
    pub num_points: Option<usize>,

    /// Color ramp (default: viridis)
    pub colormap: ColorMap,

    /// Number of filled contour bands in contour mode (default: 10)
    pub levels: usize,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for FieldSectionsConfig {
    fn default() -> Self {
        Self {
            panel_size: (420, 360),
            title: "Evolution solution, time sections".to_string(),
            timestamps: DEFAULT_TIMESTAMPS.to_vec(),
            grid_size: (2, 3),
            mode: FieldMode::Surface,
            fetches: None,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            value_lim: (-0.2, 0.2),
            num_points: None,
            colormap: ColorMap::Viridis,
            levels: 10,
            background: WHITE,
        }
    }
}

impl FieldSectionsConfig {
    /// Config rendering each section with the given mode.
    pub fn with_mode(mode: FieldMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Resolved per-axis resolution for the configured mode.
    pub(crate) fn resolution(&self) -> usize {
        self.num_points.unwrap_or_else(|| self.mode.default_num_points())
    }
}

// =================================================================================================
// Loss plot
// =================================================================================================

/// Configuration for [`plot_loss`](super::plot_loss).
#[derive(Clone)]
pub struct LossPlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Model loss")
    pub title: String,

    /// X-axis label (default: "Iteration number")
    pub xlabel: String,

    /// Y-axis label (default: "Loss")
    pub ylabel: String,

    /// Curve color (default: powder blue)
    pub line_color: RGBColor,

    /// Line thickness in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for LossPlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Model loss".to_string(),
            xlabel: "Iteration number".to_string(),
            ylabel: "Loss".to_string(),
            line_color: RGBColor(176, 224, 230),
            line_width: 2,
            show_grid: true,
            background: WHITE,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

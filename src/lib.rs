//! pdeplot: Solution Plotting for PDE Approximators
//!
//! Chart rendering for machine-learned PDE solutions: given any model
//! that can evaluate its approximate solution on a batch of points,
//! this crate builds the evaluation grids and saves publication-ready
//! charts with the `plotters` library.
//!
//! # Architecture
//!
//! pdeplot is built on two core principles:
//!
//! 1. **Separation of Model and Rendering**
//!    - The [`model::TrainedModel`] trait defines evaluation
//!      (what to draw)
//!    - The plotting functions define presentation (how to draw it)
//!
//! 2. **Grids as Plain Matrices**
//!    - Evaluation grids are `nalgebra` matrices, one row per point,
//!      one column per coordinate
//!    - [`grid::cart_prod`] builds them from per-axis samples in a
//!      fixed row order, so reshaping values back to the grid shape
//!      is index arithmetic, not bookkeeping
//!
//! # Quick Start
//!
//! ```rust
//! use pdeplot::prelude::*;
//! use nalgebra::{DMatrix, DVector};
//!
//! # struct MyModel;
//! # impl TrainedModel for MyModel {
//! #     fn solve(
//! #         &self,
//! #         points: &DMatrix<f64>,
//! #         _fetches: Option<&str>,
//! #     ) -> Result<DVector<f64>, ModelError> {
//! #         Ok(DVector::from_element(points.nrows(), 0.0))
//! #     }
//! # }
//! # fn main() -> Result<(), PlotError> {
//! # let out = std::env::temp_dir().join("field.png");
//! # let out = out.to_str().ok_or(PlotError::EmptyGrid)?;
//! // 1. A trained model implementing TrainedModel
//! let model = MyModel;
//!
//! // 2. Heatmap of its solution over the unit square
//! plot_field_2d(&model, out, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grid`]: Evaluation-grid construction
//! - [`model`]: Traits the plotted objects implement
//! - [`plot`]: The chart functions and their configurations

pub mod grid;
pub mod model;
pub mod plot;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use pdeplot::prelude::*;
    //! ```
    pub use crate::grid::{append_column, cart_prod, linspace};
    pub use crate::model::{ModelError, ReferenceSolution, TrainedModel};
    pub use crate::plot::{plot_field_2d,
                          plot_loss,
                          plot_pair_1d,
                          plot_sections_1d,
                          plot_sections_2d,
                          ColorMap,
                          FieldMode,
                          FieldPlotConfig,
                          FieldSectionsConfig,
                          LineSectionsConfig,
                          LossPlotConfig,
                          PairPlotConfig,
                          PlotError};
}

//! Evaluation-grid construction
//!
//! Plotting a trained model means evaluating it on a set of coordinate
//! points. This module builds those point sets:
//!
//! - [`cart_prod`]: cartesian-product grid over several coordinate axes
//! - [`linspace`]: uniform 1D axis between two endpoints
//! - [`append_column`]: pin an extra constant coordinate (typically time)
//!   onto an existing grid
//!
//! Grids are plain `DMatrix<f64>` values, one row per evaluation point
//! and one column per coordinate. They are built fresh for each plot
//! call and discarded after rendering; nothing here holds state.

mod cartesian;

pub use cartesian::{append_column, cart_prod, linspace};

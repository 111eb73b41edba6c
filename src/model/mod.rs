//! Trained-model capabilities
//!
//! This crate never trains or owns a model. It consumes two external
//! capabilities:
//!
//! - [`TrainedModel`]: a trained approximator that maps evaluation
//!   points to predicted values (`solve`)
//! - [`ReferenceSolution`]: a ground-truth function used by the 1D
//!   pairing plot to draw the exact solution next to the approximation
//!
//! Both are ordinary traits so the contract is checked at compile time
//! instead of duck-typed at the call site.

mod traits;

pub use traits::{ModelError, ReferenceSolution, TrainedModel};

//! Model and ground-truth traits
//!
//! # Responsibility
//!
//! [`TrainedModel`] is the single numerical interface this crate
//! depends on: it turns a grid of coordinate points into one predicted
//! value per point. How the model was trained, and what `fetches`
//! selects inside it, are the model's business.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

// =================================================================================================
// Errors
// =================================================================================================

/// Failures surfaced by a model's `solve` capability.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model failed to evaluate the given points.
    #[error("model evaluation failed: {0}")]
    Solve(String),

    /// The model does not understand the requested fetch selector.
    #[error("unsupported fetch selector '{0}'")]
    UnsupportedFetch(String),
}

// =================================================================================================
// Trained model
// =================================================================================================

/// A trained approximator that can be evaluated on a grid of points.
///
/// # Contract
///
/// `solve` receives a `(n_points × n_coords)` matrix, one evaluation
/// point per row, and must return exactly `n_points` values in row
/// order. The plotting functions verify the count and reject
/// mismatches before rendering.
///
/// `fetches` is an opaque selector forwarded verbatim from the caller;
/// models that expose several internal quantities can use it to choose
/// which one to return. Models with a single output may ignore it or
/// return [`ModelError::UnsupportedFetch`].
///
/// # Example
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use pdeplot::model::{ModelError, TrainedModel};
///
/// /// Closed-form stand-in: u(x) = sin(pi * x)
/// struct SineModel;
///
/// impl TrainedModel for SineModel {
///     fn solve(
///         &self,
///         points: &DMatrix<f64>,
///         _fetches: Option<&str>,
///     ) -> Result<DVector<f64>, ModelError> {
///         Ok(DVector::from_fn(points.nrows(), |i, _| {
///             (std::f64::consts::PI * points[(i, 0)]).sin()
///         }))
///     }
/// }
/// ```
pub trait TrainedModel {
    /// Evaluate the model at each row of `points`.
    fn solve(
        &self,
        points: &DMatrix<f64>,
        fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError>;

    /// Name of the model (used for logging).
    fn name(&self) -> &str {
        "model"
    }
}

impl<M: TrainedModel + ?Sized> TrainedModel for &M {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        (**self).solve(points, fetches)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// =================================================================================================
// Ground-truth function
// =================================================================================================

/// The exact solution of the problem a model was trained on.
///
/// Used only by the 1D pairing plot to draw the true curve (and the
/// optional confidence band) next to the network approximation.
///
/// Any closure `Fn(&DVector<f64>) -> DVector<f64>` qualifies, so
/// notebook-style call sites can pass a plain function:
///
/// ```rust
/// use nalgebra::DVector;
/// use pdeplot::model::ReferenceSolution;
///
/// let truth = |xs: &DVector<f64>| xs.map(|x| x * x);
/// let values = truth.evaluate(&DVector::from_vec(vec![0.0, 2.0]));
/// assert_eq!(values[1], 4.0);
/// ```
pub trait ReferenceSolution {
    /// Evaluate the exact solution at each coordinate.
    fn evaluate(&self, points: &DVector<f64>) -> DVector<f64>;
}

impl<F> ReferenceSolution for F
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    fn evaluate(&self, points: &DVector<f64>) -> DVector<f64> {
        self(points)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{FailingModel, ProductMode, Recording, StandingWave};
pub use test_helpers::{assert_vectors_close, chart_path, relative_error};

//! Rendering error types.

use thiserror::Error;

/// Errors raised during layout or draw. All are precondition violations;
/// a failed draw emits no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot draw an empty bar series")]
    EmptyBarSeries,
    #[error("invalid axes grid: {0}")]
    InvalidGrid(String),
}

//! Unified error handling for the typelens crate.
//!
//! Name resolution itself is total and never fails; only the label printer
//! and the JSON report path can produce errors.

use thiserror::Error;

/// Errors reported by the label printer and the report serializer.
#[derive(Error, Debug)]
pub enum LensError {
    /// Writing formatted output failed
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a report failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested axis does not exist on the frame
    #[error("axis {axis} is out of range for a frame with {ndim} dimensions")]
    UnknownAxis { axis: usize, ndim: usize },
}

/// Result alias used throughout the crate
pub type LensResult<T> = Result<T, LensError>;

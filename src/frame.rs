//! Axis-label inspection for labeled multi-dimensional arrays.
//!
//! The session environment decides which dataframe library backs its labeled
//! arrays; this module only needs a way to reach the label collection of one
//! dimension, expressed by the [`AxisLabeled`] trait. The printer writes each
//! label quoted and comma-separated, which is all a debug prompt needs.

use std::io::Write;

use crate::error::{LensError, LensResult};

/// Access to the per-dimension labels of a labeled array.
///
/// Implemented by the host environment's wrapper around its dataframe
/// library. Axis `0` is the first dimension (rows for a two-dimensional
/// frame).
pub trait AxisLabeled {
    /// Number of dimensions.
    fn ndim(&self) -> usize;

    /// The labels of one dimension, or `None` when the axis is out of range.
    fn axis_labels(&self, axis: usize) -> Option<&[String]>;
}

/// Format the labels of `axis` into an owned string, each label quoted,
/// separated by commas.
///
/// An axis with no labels formats as the empty string. Asking for an axis the
/// frame does not have is an error.
pub fn format_axis_labels<F>(frame: &F, axis: usize) -> LensResult<String>
where
    F: AxisLabeled + ?Sized,
{
    let labels = frame.axis_labels(axis).ok_or(LensError::UnknownAxis {
        axis,
        ndim: frame.ndim(),
    })?;

    let quoted: Vec<String> = labels.iter().map(|label| format!("\"{}\"", label)).collect();
    Ok(quoted.join(", "))
}

/// Write the labels of `axis` to `writer` in the same format as
/// [`format_axis_labels`].
pub fn write_axis_labels<F, W>(frame: &F, axis: usize, writer: &mut W) -> LensResult<()>
where
    F: AxisLabeled + ?Sized,
    W: Write,
{
    let line = format_axis_labels(frame, axis)?;
    writer.write_all(line.as_bytes())?;
    Ok(())
}

//! Typelens Debug-Support Library
//!
//! This library provides the helpers an interactive session (a REPL or a
//! notebook kernel) needs to show readable type information: a mangled-symbol
//! resolver, a canonical primitive-name table, an axis-label printer for
//! labeled arrays, and a serializable type report.

pub mod canonical;
pub mod error;
pub mod frame;
pub mod report;
pub mod resolver;

// Re-export commonly used items
pub use canonical::{canonical_name, describe};
pub use error::{LensError, LensResult};
pub use frame::{format_axis_labels, write_axis_labels, AxisLabeled};
pub use report::TypeReport;
pub use resolver::{resolve, short_type_name, type_name_of};

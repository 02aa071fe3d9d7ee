//! Serializable type reports.
//!
//! A front end asking "what is this value?" gets one of these: the resolved
//! type name, the short name, the canonical classification, and the layout.
//! Reports serialize to JSON the same way the session dumps other structured
//! payloads.

use std::mem;

use serde::Serialize;

use crate::canonical::canonical_name;
use crate::error::LensResult;
use crate::resolver::{short_type_name, type_name_of};

/// Snapshot of a type's identity and layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    /// Fully resolved type name
    pub name: String,
    /// Name with the module path stripped
    pub short_name: String,
    /// Canonical primitive classification, or `"other"`
    pub canonical: &'static str,
    /// Size in bytes
    pub size: usize,
    /// Alignment in bytes
    pub align: usize,
}

impl TypeReport {
    /// Build a report for the type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            name: crate::resolver::resolve(std::any::type_name::<T>()),
            short_name: short_type_name::<T>().to_string(),
            canonical: canonical_name::<T>(),
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
        }
    }

    /// Build a report from a value. Unlike [`TypeReport::of`] this also
    /// handles unsized referents such as `str` and slices.
    pub fn of_val<T: ?Sized + 'static>(value: &T) -> Self {
        Self {
            name: type_name_of(value),
            short_name: short_type_name::<T>().to_string(),
            canonical: canonical_name::<T>(),
            size: mem::size_of_val(value),
            align: mem::align_of_val(value),
        }
    }

    /// JSON rendering of the report.
    pub fn to_json(&self) -> LensResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Canonical names for the primitive types an interactive session trades in.
//!
//! The table covers the fixed set of scalar types a kernel boundary can
//! transfer directly. Everything else classifies as `"other"` and has to go
//! through the resolver for a readable name.

use std::any::TypeId;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

static CANONICAL: Lazy<IndexMap<TypeId, &'static str>> = Lazy::new(|| {
    let mut table = IndexMap::new();
    table.insert(TypeId::of::<bool>(), "bool");
    table.insert(TypeId::of::<i8>(), "i8");
    table.insert(TypeId::of::<i16>(), "i16");
    table.insert(TypeId::of::<i32>(), "i32");
    table.insert(TypeId::of::<i64>(), "i64");
    table.insert(TypeId::of::<i128>(), "i128");
    table.insert(TypeId::of::<isize>(), "isize");
    table.insert(TypeId::of::<u8>(), "u8");
    table.insert(TypeId::of::<u16>(), "u16");
    table.insert(TypeId::of::<u32>(), "u32");
    table.insert(TypeId::of::<u64>(), "u64");
    table.insert(TypeId::of::<u128>(), "u128");
    table.insert(TypeId::of::<usize>(), "usize");
    table.insert(TypeId::of::<f32>(), "f32");
    table.insert(TypeId::of::<f64>(), "f64");
    table.insert(TypeId::of::<char>(), "char");
    table.insert(TypeId::of::<str>(), "str");
    table.insert(TypeId::of::<&str>(), "str");
    table.insert(TypeId::of::<String>(), "string");
    table
});

/// Canonical name for `T`, or `"other"` when `T` is not in the table.
///
/// The table is built once on first use and never mutated afterwards, so
/// lookups are pure and safe from any thread.
pub fn canonical_name<T: ?Sized + 'static>() -> &'static str {
    CANONICAL
        .get(&TypeId::of::<T>())
        .copied()
        .unwrap_or("other")
}

/// Like [`canonical_name`], but unlisted types fall back to the full
/// introspected type name instead of `"other"`.
pub fn describe<T: ?Sized + 'static>() -> &'static str {
    match CANONICAL.get(&TypeId::of::<T>()) {
        Some(name) => name,
        None => std::any::type_name::<T>(),
    }
}

//! Runtime type-name resolution.
//!
//! Mangled symbols show up wherever an interactive session crosses a compiled
//! boundary: backtrace frames, the export table of a freshly compiled cell,
//! linker diagnostics. [`resolve`] turns them back into source-level names and
//! hands back the input untouched when the identifier is not mangled at all.

use rustc_demangle::try_demangle;

/// Resolve a runtime type identifier or symbol to a readable string.
///
/// On success the demangled name is returned without the trailing hash
/// suffix. Any input the demangler rejects comes back verbatim, so the
/// function is total: it never fails and never returns an empty string for a
/// non-empty input. Each call produces a fresh owned string; nothing is
/// cached.
pub fn resolve(descriptor: &str) -> String {
    match try_demangle(descriptor) {
        Ok(demangled) => format!("{:#}", demangled),
        Err(_) => {
            log::trace!("not a mangled symbol, keeping verbatim: {}", descriptor);
            descriptor.to_string()
        }
    }
}

/// Resolve the declared type of a value to a readable string.
///
/// Obtains the compile-time type name of `value` and runs it through
/// [`resolve`]; the guarantees are identical.
pub fn type_name_of<T: ?Sized>(_value: &T) -> String {
    resolve(std::any::type_name::<T>())
}

/// The name of `T` with the module path of its base type stripped.
///
/// Generic parameters are kept as written by the introspection facility, so
/// `Vec<u8>` comes back as `"Vec<u8>"`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

//! Runtime address resolution.
//!
//! Combines a library's discovered load base with a symbol's link-time
//! address to produce the absolute address of that symbol in the current
//! process.

use std::path::PathBuf;

use crate::error::Error;
use crate::symtab::SymbolTable;

/// A library of the current process whose load base has been discovered.
///
/// This is a plain value object: callers pass it explicitly into every
/// resolution, so several target libraries can be resolved independently.
/// It stays valid until the library is unloaded (not detected here).
#[derive(Debug, Clone)]
pub struct LoadedLibrary {
    pub path: PathBuf,
    pub base_address: u64,
    /// Whether link-time addresses must be rebased onto `base_address`.
    /// Derived from the container class: 64-bit is treated as
    /// position-independent, 32-bit as fixed-address.
    pub position_independent: bool,
}

/// The absolute runtime address of one symbol.
///
/// Computed on demand and only meaningful for the [`LoadedLibrary`] it was
/// resolved against; never reuse it across a process restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub runtime_address: u64,
    pub declared_size: u64,
}

/// Resolve `name` to its absolute address in the current process.
///
/// Pure pointer arithmetic: no memory is touched, and repeated calls with
/// the same inputs return the same address. Fails with
/// [`Error::SymbolNotFound`] when the table has no such symbol.
pub fn resolve(
    library: &LoadedLibrary,
    table: &SymbolTable,
    name: &str,
) -> Result<ResolvedAddress, Error> {
    let entry = table.lookup(name).ok_or_else(|| Error::SymbolNotFound {
        name: name.to_string(),
    })?;

    let runtime_address = if library.position_independent {
        library.base_address + entry.address
    } else {
        entry.address
    };

    tracing::trace!(
        "resolved {} to {:#x} (link-time {:#x}, size {})",
        name,
        runtime_address,
        entry.address,
        entry.size
    );

    Ok(ResolvedAddress {
        runtime_address,
        declared_size: entry.size,
    })
}

//! Named-flag convenience layer.
//!
//! `FlagProbe` ties the other modules together: locate the target library,
//! parse its symbol table once, then read and write flags by name. It also
//! carries an optional default-value cache for flags that were compiled out
//! of the target build.

use std::collections::HashMap;

use crate::error::Error;
use crate::maps::{self, LibraryMapping};
use crate::mem;
use crate::resolve::{resolve, LoadedLibrary, ResolvedAddress};
use crate::symtab::SymbolTable;

struct Target {
    library: LoadedLibrary,
    table: SymbolTable,
}

/// Typed access to the named flags of one loaded library.
///
/// A probe starts unattached; [`FlagProbe::attach`] must succeed before any
/// resolution. The probe holds no locks: if the embedding application is
/// multithreaded, concurrent access to the same flag must be serialized by
/// the caller.
#[derive(Default)]
pub struct FlagProbe {
    target: Option<Target>,
    bool_defaults: HashMap<String, bool>,
    int_defaults: HashMap<String, i32>,
}

impl FlagProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locate the first loaded library whose path contains `needle` and
    /// parse its static symbol table.
    pub fn attach(&mut self, needle: &str) -> Result<(), Error> {
        let mapping = maps::locate(needle)?;
        self.attach_mapping(mapping)
    }

    /// Attach to an already-located mapping.
    ///
    /// Useful when the caller scanned the memory maps itself or wants to
    /// target a specific mapping among several candidates.
    pub fn attach_mapping(&mut self, mapping: LibraryMapping) -> Result<(), Error> {
        let table = SymbolTable::read(&mapping.path)?;
        let library = LoadedLibrary {
            path: mapping.path,
            base_address: mapping.base_address,
            // 32-bit containers are treated as fixed-address: their symbol
            // addresses are used as-is, with no rebasing.
            position_independent: table.is_64(),
        };
        tracing::debug!(
            "attached to {} (base {:#x}, pie: {})",
            library.path.display(),
            library.base_address,
            library.position_independent
        );
        self.target = Some(Target { library, table });
        Ok(())
    }

    /// The library this probe is attached to, if any.
    pub fn library(&self) -> Option<&LoadedLibrary> {
        self.target.as_ref().map(|t| &t.library)
    }

    /// Resolve a flag symbol to its runtime address.
    ///
    /// Fails with [`Error::Uninitialized`] before a successful attach.
    pub fn resolve(&self, name: &str) -> Result<ResolvedAddress, Error> {
        let target = self.target.as_ref().ok_or(Error::Uninitialized)?;
        resolve(&target.library, &target.table, name)
    }

    /// Read a boolean flag by name.
    ///
    /// # Safety
    /// The symbol must actually be a live one-byte flag of the attached
    /// library; a symbol of any other shape makes the access undefined.
    pub unsafe fn get_bool(&self, name: &str) -> Result<bool, Error> {
        let addr = self.resolve(name)?;
        Ok(mem::read_bool(addr.runtime_address))
    }

    /// Write a boolean flag by name.
    ///
    /// # Safety
    /// Same contract as [`FlagProbe::get_bool`], and the flag must be in
    /// writable memory.
    pub unsafe fn set_bool(&mut self, name: &str, value: bool) -> Result<(), Error> {
        let addr = self.resolve(name)?;
        mem::write_bool(addr.runtime_address, value);
        Ok(())
    }

    /// Read a 32-bit integer flag by name.
    ///
    /// # Safety
    /// The symbol must actually be a live, aligned `i32` of the attached
    /// library.
    pub unsafe fn get_i32(&self, name: &str) -> Result<i32, Error> {
        let addr = self.resolve(name)?;
        Ok(mem::read_i32(addr.runtime_address))
    }

    /// Write a 32-bit integer flag by name.
    ///
    /// # Safety
    /// Same contract as [`FlagProbe::get_i32`], and the flag must be in
    /// writable memory.
    pub unsafe fn set_i32(&mut self, name: &str, value: i32) -> Result<(), Error> {
        let addr = self.resolve(name)?;
        mem::write_i32(addr.runtime_address, value);
        Ok(())
    }

    /// Seed a fallback value for a boolean flag that may be absent from the
    /// target build.
    pub fn set_default_bool(&mut self, name: &str, value: bool) {
        self.bool_defaults.insert(name.to_string(), value);
    }

    /// Seed a fallback value for an integer flag that may be absent from the
    /// target build.
    pub fn set_default_i32(&mut self, name: &str, value: i32) {
        self.int_defaults.insert(name.to_string(), value);
    }

    /// Read a boolean flag, falling back to its seeded default (or `false`)
    /// when the symbol is absent from the table.
    ///
    /// # Safety
    /// Same contract as [`FlagProbe::get_bool`] when the symbol exists.
    pub unsafe fn get_bool_or_default(&self, name: &str) -> Result<bool, Error> {
        match self.get_bool(name) {
            Err(Error::SymbolNotFound { .. }) => {
                Ok(self.bool_defaults.get(name).copied().unwrap_or(false))
            }
            other => other,
        }
    }

    /// Read an integer flag, falling back to its seeded default (or `0`)
    /// when the symbol is absent from the table.
    ///
    /// # Safety
    /// Same contract as [`FlagProbe::get_i32`] when the symbol exists.
    pub unsafe fn get_i32_or_default(&self, name: &str) -> Result<i32, Error> {
        match self.get_i32(name) {
            Err(Error::SymbolNotFound { .. }) => {
                Ok(self.int_defaults.get(name).copied().unwrap_or(0))
            }
            other => other,
        }
    }
}

//! Static symbol table parsing.
//!
//! Reads the `.symtab` section of an ELF binary into a queryable index of
//! symbol name to link-time address. The dynamic symbol table (`.dynsym`) is
//! deliberately not consulted: the variables of interest are internal and
//! never exported.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use object::read::SectionIndex;
use object::{BinaryFormat, Object, ObjectSymbol};

use crate::error::Error;

/// A symbol recorded in a binary's static symbol table.
///
/// The address is the link-time value: relative to the load base for
/// position-independent binaries, absolute otherwise.
#[derive(Debug, Clone)]
pub struct SymbolTableEntry {
    pub name: String,
    pub address: u64,
    pub size: u64,
    /// Section the symbol is defined in, if any (absolute symbols have none).
    pub section_index: Option<SectionIndex>,
}

/// The parsed `.symtab` of one binary.
///
/// Entries keep table order; lookups by exact name go through a side index.
/// Duplicate names keep the first-seen entry.
#[derive(Debug)]
pub struct SymbolTable {
    entries: Vec<SymbolTableEntry>,
    by_name: HashMap<String, usize>,
    is_64: bool,
}

impl SymbolTable {
    /// Parse the static symbol table of the ELF binary at `path`.
    ///
    /// The file mapping is scoped to this call and released when it returns,
    /// on success or failure.
    pub fn read(path: &Path) -> Result<SymbolTable, Error> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::parse(&mmap, path)
    }

    /// Parse a symbol table out of in-memory ELF image bytes.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(data: &[u8], path: &Path) -> Result<SymbolTable, Error> {
        let obj = object::File::parse(data).map_err(|_| Error::Format {
            path: path.to_path_buf(),
        })?;
        if obj.format() != BinaryFormat::Elf {
            return Err(Error::Format {
                path: path.to_path_buf(),
            });
        }

        // symbol_table() is the static table; a stripped binary has none.
        if obj.symbol_table().is_none() {
            return Err(Error::SymbolTableMissing {
                path: path.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        let mut by_name = HashMap::new();
        for sym in obj.symbols() {
            let name = sym.name().map_err(|_| Error::Format {
                path: path.to_path_buf(),
            })?;
            if name.is_empty() || by_name.contains_key(name) {
                continue;
            }
            by_name.insert(name.to_string(), entries.len());
            entries.push(SymbolTableEntry {
                name: name.to_string(),
                address: sym.address(),
                size: sym.size(),
                section_index: sym.section_index(),
            });
        }

        tracing::debug!(
            "parsed {} symbols from {} ({}-bit)",
            entries.len(),
            path.display(),
            if obj.is_64() { 64 } else { 32 }
        );

        Ok(SymbolTable {
            entries,
            by_name,
            is_64: obj.is_64(),
        })
    }

    /// Look up a symbol by exact name.
    ///
    /// Returns `None` when absent; missing symbols are an expected outcome
    /// (optional flags compiled out of the target) and not an error here.
    pub fn lookup(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Whether the container was a 64-bit ELF.
    ///
    /// Address resolution only rebases symbols of 64-bit binaries; 32-bit
    /// containers are treated as fixed-address.
    pub fn is_64(&self) -> bool {
        self.is_64
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[SymbolTableEntry] {
        &self.entries
    }
}

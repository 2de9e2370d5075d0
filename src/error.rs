//! Error type shared by all modules.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by library lookup, symbol table parsing and resolution.
///
/// Absence of a symbol is reported as [`Error::SymbolNotFound`] by the
/// resolver; plain table lookups return `Option` instead, since a missing
/// symbol is a common, expected outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// The file is not an ELF container (wrong magic or unparsable header).
    #[error("not an ELF binary: {path}")]
    Format { path: PathBuf },

    /// The binary has no static `.symtab` section (stripped binary).
    #[error("no .symtab section in {path}")]
    SymbolTableMissing { path: PathBuf },

    /// No mapping in the memory-map listing matched the requested library.
    #[error("no loaded library matching \"{needle}\"")]
    LibraryNotFound { needle: String },

    /// A memory-map line's address range was not a pure hexadecimal range.
    #[error("malformed memory map entry: {line}")]
    MalformedMapEntry { line: String },

    /// The symbol is absent from the parsed symbol table.
    #[error("symbol not found: {name}")]
    SymbolNotFound { name: String },

    /// A resolution was attempted before any library was located.
    #[error("no library attached; call attach() first")]
    Uninitialized,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

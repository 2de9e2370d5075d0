//! Typed access to internal variables of a loaded native library.
//!
//! This library locates a shared library inside the current process, parses
//! its static symbol table, and resolves named (non-exported) variables to
//! live runtime addresses for direct reads and writes.
//! It is organized into several modules:
//! - `config`: CLI configuration.
//! - `maps`: Process memory-map scanning.
//! - `symtab`: ELF static symbol table parsing.
//! - `resolve`: Runtime address resolution.
//! - `mem`: Raw typed memory access.
//! - `flags`: Named-flag convenience layer.

pub mod config;
pub mod error;
pub mod flags;
pub mod maps;
pub mod mem;
pub mod resolve;
pub mod symtab;

pub use error::Error;
pub use flags::FlagProbe;
pub use maps::{locate, LibraryMapping};
pub use resolve::{resolve, LoadedLibrary, ResolvedAddress};
pub use symtab::{SymbolTable, SymbolTableEntry};

//! Configuration module.
//!
//! This module defines the command-line interface (CLI) for the flag tool
//! using `clap`. It handles selecting the target library and the flag
//! operation to perform.

use clap::{Parser, Subcommand};

/// Read and write internal named variables of a native library loaded into
/// this process.
///
/// Only ELF binaries with an intact `.symtab` section are supported; the
/// target library is selected by a substring of its path in the process
/// memory map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Substring of the target library's path (e.g. "libjvm.so")
    #[arg(short, long)]
    pub library: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the runtime address and declared size of a symbol
    Resolve { symbol: String },
    /// Read a boolean flag
    GetBool { flag: String },
    /// Write a boolean flag
    SetBool { flag: String, value: bool },
    /// Read a 32-bit integer flag
    GetInt { flag: String },
    /// Write a 32-bit integer flag
    SetInt { flag: String, value: i32 },
}

//! Entry point for the vmflags tool.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Locate the target library in this process's memory map.
//! 3. Parse its static symbol table and resolve the requested symbol.
//! 4. Perform the requested typed read or write.
//!
//! Error handling is done via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmflags::config::{Command, Config};
use vmflags::flags::FlagProbe;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut probe = FlagProbe::new();
    probe
        .attach(&config.library)
        .with_context(|| format!("failed to attach to a library matching \"{}\"", config.library))?;

    match config.command {
        Command::Resolve { symbol } => {
            let addr = probe.resolve(&symbol)?;
            println!(
                "{symbol} = {:#x} (size {})",
                addr.runtime_address, addr.declared_size
            );
        }
        Command::GetBool { flag } => {
            let value = unsafe { probe.get_bool(&flag)? };
            println!("{flag} = {value}");
        }
        Command::SetBool { flag, value } => {
            unsafe { probe.set_bool(&flag, value)? };
            println!("{flag} = {value}");
        }
        Command::GetInt { flag } => {
            let value = unsafe { probe.get_i32(&flag)? };
            println!("{flag} = {value}");
        }
        Command::SetInt { flag, value } => {
            unsafe { probe.set_i32(&flag, value)? };
            println!("{flag} = {value}");
        }
    }

    Ok(())
}

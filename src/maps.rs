//! Process memory-map scanning.
//!
//! Parses the current process's `/proc/self/maps` listing to find the load
//! base and backing file path of a target shared library. Each line has the
//! form `<hexLow>-<hexHigh> <perms> <offset> <dev> <inode> <path>`; only the
//! leading address range and the path are consumed.

use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// A library discovered in the memory-map listing.
#[derive(Debug, Clone)]
pub struct LibraryMapping {
    /// Absolute path of the backing file.
    pub path: PathBuf,
    /// Lowest mapped virtual address, i.e. the load base.
    pub base_address: u64,
}

/// Find a loaded library of the current process by path substring.
///
/// Reads `/proc/self/maps` once; there is no caching. Call again for a fresh
/// view if the process's mappings may have changed.
pub fn locate(needle: &str) -> Result<LibraryMapping, Error> {
    let maps = fs::read_to_string("/proc/self/maps")?;
    find_library(&maps, needle)
}

/// Scan a memory-map listing for the first mapping whose backing path
/// contains `needle`.
///
/// Mappings are listed in ascending address order, so the first match is the
/// library's lowest mapping and its start address is the load base. The
/// address range of every line scanned is validated as pure hex before use;
/// a malformed line aborts the scan rather than risking a wrong base.
pub fn find_library(maps: &str, needle: &str) -> Result<LibraryMapping, Error> {
    for line in maps.lines() {
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let range = fields.next().ok_or_else(|| malformed(line))?;
        let (low, high) = range.split_once('-').ok_or_else(|| malformed(line))?;
        if low.is_empty()
            || high.is_empty()
            || !low.bytes().all(|b| b.is_ascii_hexdigit())
            || !high.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(malformed(line));
        }
        let base = u64::from_str_radix(low, 16).map_err(|_| malformed(line))?;

        // Skip perms, offset, dev, inode; anonymous mappings have no path.
        let path = match fields.nth(4) {
            Some(p) => p,
            None => continue,
        };
        if !path.contains(needle) {
            continue;
        }

        tracing::debug!("found {} at base {:#x}", path, base);
        return Ok(LibraryMapping {
            path: PathBuf::from(path),
            base_address: base,
        });
    }

    Err(Error::LibraryNotFound {
        needle: needle.to_string(),
    })
}

fn malformed(line: &str) -> Error {
    Error::MalformedMapEntry {
        line: line.to_string(),
    }
}

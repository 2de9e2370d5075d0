//! Raw typed memory access.
//!
//! All of the crate's unsafety funnels through the four primitives below:
//! each one is a single volatile access at a caller-supplied address, with
//! no bounds or permission checking of any kind. A wrong address will
//! corrupt or kill the process; validity is entirely the caller's
//! responsibility.

/// Read a boolean flag at `addr`.
///
/// Flags are a single byte in the target; any nonzero byte reads as `true`.
///
/// # Safety
/// `addr` must be a live, readable byte in this process's address space.
pub unsafe fn read_bool(addr: u64) -> bool {
    std::ptr::read_volatile(addr as *const u8) != 0
}

/// Write a boolean flag at `addr`.
///
/// The store is immediately visible to any subsequent read of the same
/// address in this process.
///
/// # Safety
/// `addr` must be a live, writable byte in this process's address space.
pub unsafe fn write_bool(addr: u64, value: bool) {
    std::ptr::write_volatile(addr as *mut u8, value as u8);
}

/// Read a 32-bit integer flag at `addr`.
///
/// # Safety
/// `addr` must be a live, readable, suitably aligned `i32` in this
/// process's address space.
pub unsafe fn read_i32(addr: u64) -> i32 {
    std::ptr::read_volatile(addr as *const i32)
}

/// Write a 32-bit integer flag at `addr`.
///
/// # Safety
/// `addr` must be a live, writable, suitably aligned `i32` in this
/// process's address space.
pub unsafe fn write_i32(addr: u64, value: i32) {
    std::ptr::write_volatile(addr as *mut i32, value);
}

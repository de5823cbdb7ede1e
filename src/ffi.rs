//! C-callable entry points, `mm_malloc` and `mm_free`, backed by a single
//! process-wide [`Allocator`] instance created on first use.
//!
//! The singleton is guarded by a `OnceLock`-wrapped mutex rather than bare
//! `OnceLock<Allocator>`, since every call needs mutable access to the same
//! instance and `Allocator` is intentionally not `Sync`. The mutex exists to
//! make the singleton's single `Mutex::lock` call sound to write, not to
//! make the allocator itself safe to drive from more than one thread at a
//! time — recursive or concurrent entry from two threads will simply
//! serialize on the lock rather than corrupt state, but the contract this
//! crate targets is still a single logical caller.

use crate::allocator::Allocator;
use std::ptr;
use std::sync::{Mutex, OnceLock};

static ALLOCATOR: OnceLock<Mutex<Allocator>> = OnceLock::new();

fn instance() -> &'static Mutex<Allocator> {
    ALLOCATOR.get_or_init(|| Mutex::new(Allocator::new()))
}

/// Allocates `size` bytes, returning a null pointer on failure.
///
/// Mirrors the C `malloc` contract: `size == 0` is permitted to return
/// either null or a unique freeable pointer, but this implementation always
/// returns null for it, matching [`crate::error::AllocError::InvalidArgument`].
///
/// # Safety
/// Must only be called from a single logical thread of control at a time,
/// per this crate's single-threaded contract.
#[no_mangle]
pub unsafe extern "C" fn mm_malloc(size: usize) -> *mut u8 {
    let mut guard = match instance().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    match guard.allocate(size) {
        Ok(bp) => bp.as_ptr(),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees a pointer previously returned by [`mm_malloc`]. A null pointer is a
/// no-op, matching the C `free` contract.
///
/// # Safety
/// `ptr` must be null or a pointer currently allocated by [`mm_malloc`] on
/// this allocator, not already freed.
#[no_mangle]
pub unsafe extern "C" fn mm_free(ptr: *mut u8) {
    let Some(bp) = std::ptr::NonNull::new(ptr) else {
        return;
    };
    let mut guard = match instance().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    unsafe { guard.release(bp) };
}

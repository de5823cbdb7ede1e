use libc::{c_void, mmap, munmap, MAP_ANONYMOUS, MAP_FAILED, MAP_PRIVATE, PROT_READ, PROT_WRITE};
use std::ptr;

/// Maps `size` bytes of fresh, zero-filled anonymous memory.
///
/// # Safety
/// `size` must be greater than zero.
pub unsafe fn map_region(size: usize) -> Option<*mut u8> {
    let ptr = mmap(
        ptr::null_mut(),
        size,
        PROT_READ | PROT_WRITE,
        MAP_PRIVATE | MAP_ANONYMOUS,
        -1,
        0,
    );

    if ptr == MAP_FAILED {
        None
    } else {
        Some(ptr as *mut u8)
    }
}

/// Releases a region previously returned by [`map_region`].
///
/// # Safety
/// `ptr` and `size` must match a prior successful `map_region` call exactly.
pub unsafe fn unmap_region(ptr: *mut u8, size: usize) {
    munmap(ptr as *mut c_void, size);
}

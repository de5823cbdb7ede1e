use std::ptr;
use windows_sys::Win32::System::Memory::{
    VirtualAlloc, VirtualFree, MEM_COMMIT, MEM_RELEASE, MEM_RESERVE, PAGE_READWRITE,
};

/// Maps `size` bytes of fresh, zero-filled anonymous memory.
///
/// # Safety
/// `size` must be greater than zero.
pub unsafe fn map_region(size: usize) -> Option<*mut u8> {
    let ptr = VirtualAlloc(ptr::null_mut(), size, MEM_COMMIT | MEM_RESERVE, PAGE_READWRITE);
    if ptr.is_null() {
        None
    } else {
        Some(ptr as *mut u8)
    }
}

/// Releases a region previously returned by [`map_region`].
///
/// # Safety
/// `ptr` must be a base address returned by `map_region`. `size` is ignored:
/// `MEM_RELEASE` always frees the entire region reserved by `VirtualAlloc`.
pub unsafe fn unmap_region(ptr: *mut u8, _size: usize) {
    VirtualFree(ptr as *mut _, 0, MEM_RELEASE);
}

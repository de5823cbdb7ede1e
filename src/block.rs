//! Intra-slab block layout: boundary tags, payload/link area, and the raw
//! pointer arithmetic that walks between physical neighbours and free-list
//! neighbours.
//!
//! Every function here is `unsafe`: the byte range it touches has already
//! been reinterpreted as allocator bookkeeping, so none of it can be
//! expressed through a type the borrow checker understands. Confining that
//! to one module is deliberate — nothing above this layer ever reads or
//! writes a header/footer/link word directly.
//!
//! A block pointer (`bp`) always denotes the first byte of the
//! payload-or-link area, i.e. the address returned to callers of
//! `Allocator::allocate`. `header(bp) == bp - HEADER_SIZE`.

use crate::config::{FOOTER_SIZE, HEADER_SIZE, LINK_SIZE};
use std::ptr::NonNull;

const ALLOC_BIT: u32 = 0x1;
const SIZE_MASK: u32 = !0x7;

/// Address of `bp`'s header word.
#[inline]
unsafe fn header(bp: NonNull<u8>) -> *mut u32 {
    unsafe { bp.as_ptr().sub(HEADER_SIZE) as *mut u32 }
}

/// Size encoded in a header/footer word, with the flag bits masked off.
#[inline]
pub unsafe fn size(bp: NonNull<u8>) -> usize {
    unsafe { (header(bp).read() & SIZE_MASK) as usize }
}

/// Whether `bp`'s allocation bit is set.
#[inline]
pub unsafe fn is_allocated(bp: NonNull<u8>) -> bool {
    unsafe { header(bp).read() & ALLOC_BIT != 0 }
}

/// Packs a size and allocation bit into a boundary-tag word.
///
/// # Panics
/// Panics (debug builds) if `size` is not DWORD-aligned — the low three
/// bits are reserved for flags.
#[inline]
fn pack(size: usize, allocated: bool) -> u32 {
    debug_assert_eq!(size % crate::config::DWORD, 0, "block size must be DWORD-aligned");
    debug_assert!(size <= SIZE_MASK as usize, "block size overflows a packed word");
    size as u32 | (allocated as u32)
}

/// Writes matching header and footer words for a block starting at `bp`
/// with the given total size and allocation bit. Maintains invariant I1
/// (header and footer are always byte-equal).
///
/// # Safety
/// `bp` must denote a live block of at least `size` bytes within a mapped
/// slab, and `size` must be DWORD-aligned.
pub unsafe fn write_tags(bp: NonNull<u8>, size: usize, allocated: bool) {
    let word = pack(size, allocated);
    unsafe {
        header(bp).write(word);
        footer_ptr(bp, size).write(word);
    }
}

/// Address of the footer word for a block of the given size starting at
/// `bp`. Exposed separately from [`write_tags`] because callers sometimes
/// need to address a footer whose size they already hold (e.g. coalescing
/// writes to a neighbour's footer slot after recomputing the size).
#[inline]
pub unsafe fn footer_ptr(bp: NonNull<u8>, size: usize) -> *mut u32 {
    unsafe { bp.as_ptr().add(size - HEADER_SIZE - FOOTER_SIZE) as *mut u32 }
}

/// Asserts, in debug builds, that `bp`'s header and footer agree. A
/// mismatch means prior bookkeeping corrupted the block; per design this
/// aborts rather than attempting to recover.
#[inline]
pub unsafe fn assert_invariant(bp: NonNull<u8>) {
    #[cfg(debug_assertions)]
    {
        let head = unsafe { header(bp).read() };
        let foot = unsafe { footer_ptr(bp, size(bp)).read() };
        if head != foot {
            #[cfg(feature = "tracing")]
            tracing::error!(?bp, header = head, footer = foot, "header/footer mismatch, aborting");
            panic!("header/footer mismatch: block at {:p} is corrupt", bp);
        }
    }
}

/// The block immediately following `bp` in address order. Always exists —
/// the slab's epilogue header terminates every chain, so this never walks
/// off the end of a mapped region.
///
/// # Safety
/// `bp` must denote a live block whose header's size field is accurate.
#[inline]
pub unsafe fn next_physical(bp: NonNull<u8>) -> NonNull<u8> {
    unsafe { NonNull::new_unchecked(bp.as_ptr().add(size(bp))) }
}

/// The block immediately preceding `bp` in address order, found by reading
/// its footer (the word directly before `bp`'s header). Always exists —
/// the slab's prologue block terminates every chain at the left.
///
/// # Safety
/// `bp` must not be the first usable block's left neighbour (i.e. must not
/// read before the slab's prologue footer). Every legitimate `bp` produced
/// by this crate satisfies that, since the prologue always precedes it.
#[inline]
pub unsafe fn prev_physical(bp: NonNull<u8>) -> NonNull<u8> {
    unsafe {
        let prev_footer = bp.as_ptr().sub(HEADER_SIZE + FOOTER_SIZE) as *mut u32;
        let prev_size = (prev_footer.read() & SIZE_MASK) as usize;
        NonNull::new_unchecked(bp.as_ptr().sub(prev_size))
    }
}

/// Reads the free-list "next" link stored in `bp`'s payload area.
///
/// # Safety
/// `bp` must currently be a free block (the payload area is link storage
/// only while unallocated).
#[inline]
pub unsafe fn next_in_list(bp: NonNull<u8>) -> Option<NonNull<u8>> {
    unsafe { NonNull::new(*(bp.as_ptr() as *mut *mut u8)) }
}

/// Reads the free-list "previous" link stored in `bp`'s payload area.
///
/// # Safety
/// Same contract as [`next_in_list`].
#[inline]
pub unsafe fn prev_in_list(bp: NonNull<u8>) -> Option<NonNull<u8>> {
    unsafe { NonNull::new(*(bp.as_ptr().add(LINK_SIZE) as *mut *mut u8)) }
}

/// Overwrites `bp`'s "next" link.
///
/// # Safety
/// Same contract as [`next_in_list`].
#[inline]
pub unsafe fn set_next_in_list(bp: NonNull<u8>, next: Option<NonNull<u8>>) {
    unsafe {
        *(bp.as_ptr() as *mut *mut u8) = next.map_or(std::ptr::null_mut(), |p| p.as_ptr());
    }
}

/// Overwrites `bp`'s "previous" link.
///
/// # Safety
/// Same contract as [`next_in_list`].
#[inline]
pub unsafe fn set_prev_in_list(bp: NonNull<u8>, prev: Option<NonNull<u8>>) {
    unsafe {
        *(bp.as_ptr().add(LINK_SIZE) as *mut *mut u8) = prev.map_or(std::ptr::null_mut(), |p| p.as_ptr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A stack-allocated byte buffer big enough to host one block plus its
    /// boundary tags, with helpers to treat it as a fake slab region.
    fn make_block(buf: &mut [u8], payload_size: usize) -> NonNull<u8> {
        let bp = unsafe { NonNull::new_unchecked(buf.as_mut_ptr().add(HEADER_SIZE)) };
        unsafe { write_tags(bp, payload_size, false) };
        bp
    }

    #[test]
    fn header_and_footer_stay_equal() {
        let mut buf = [0u8; 64];
        let bp = make_block(&mut buf, 32);
        unsafe {
            assert_eq!(size(bp), 32);
            assert!(!is_allocated(bp));
            assert_invariant(bp);
        }
    }

    #[test]
    fn pack_round_trips_alloc_bit() {
        let mut buf = [0u8; 64];
        let bp = make_block(&mut buf, 32);
        unsafe {
            write_tags(bp, 32, true);
            assert!(is_allocated(bp));
            assert_eq!(size(bp), 32);
        }
    }

    #[test]
    fn list_links_round_trip() {
        let mut buf = [0u8; 64];
        let bp = make_block(&mut buf, 32);
        let fake_next = unsafe { NonNull::new_unchecked(0x1000 as *mut u8) };
        unsafe {
            set_next_in_list(bp, Some(fake_next));
            set_prev_in_list(bp, None);
            assert_eq!(next_in_list(bp), Some(fake_next));
            assert_eq!(prev_in_list(bp), None);
        }
    }
}

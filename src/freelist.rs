//! Segregated free lists: one doubly-linked, unordered list per size class.
//!
//! Class `i` holds free blocks in `[MIN_BLOCK_SIZE << i, MIN_BLOCK_SIZE << (i
//! + 1))`, with the last class holding everything from its low end up to
//! `MAX_BLOCK_SIZE`. Each list is threaded through the two link words that
//! only exist in a block's payload area while it is free — see
//! [`crate::block`].
//!
//! Unlike the list this is modeled after, `next` and `prev` are tracked as
//! two distinct pointers per node. An earlier revision of the algorithm this
//! crate implements wrote the same value into both slots on removal, which
//! left `prev` silently wrong after the first unlink from the middle of a
//! list; every mutation here updates exactly one slot with exactly the
//! value that belongs there.

use crate::block;
use crate::config::{MIN_BLOCK_SIZE, NUM_SIZE_CLASSES};
use std::ptr::NonNull;

/// Maps a block size to its size class index.
#[inline]
pub fn class_of(size: usize) -> usize {
    debug_assert!(size >= MIN_BLOCK_SIZE);
    let ratio = size / MIN_BLOCK_SIZE;
    let idx = (usize::BITS - ratio.leading_zeros()).saturating_sub(1) as usize;
    idx.min(NUM_SIZE_CLASSES - 1)
}

/// The lower bound of size class `i`: class `i` holds sizes in
/// `[class_min_size(i), 2 * class_min_size(i))`. The inverse of
/// [`class_of`] at exact class boundaries.
#[inline]
pub const fn class_min_size(i: usize) -> usize {
    MIN_BLOCK_SIZE << i
}

/// The segregated free-list table plus the allocator's most-recently-freed
/// class cache.
pub struct Freelists {
    heads: [Option<NonNull<u8>>; NUM_SIZE_CLASSES],
    /// Class of the block most recently returned by [`Freelists::push`].
    /// `find_fit` consults this before walking the table, since a freshly
    /// coalesced block is the most likely fit for the next request.
    last_freed_idx: Option<usize>,
}

impl Freelists {
    pub const fn new() -> Self {
        Freelists {
            heads: [None; NUM_SIZE_CLASSES],
            last_freed_idx: None,
        }
    }

    /// Inserts `bp` at the head of its size class's list and records the
    /// class as most-recently-freed.
    ///
    /// # Safety
    /// `bp` must be a free block not already present in any list.
    pub unsafe fn push(&mut self, bp: NonNull<u8>, size: usize) {
        let idx = class_of(size);
        let old_head = self.heads[idx];
        unsafe {
            block::set_next_in_list(bp, old_head);
            block::set_prev_in_list(bp, None);
            if let Some(head) = old_head {
                block::set_prev_in_list(head, Some(bp));
            }
        }
        self.heads[idx] = Some(bp);
        self.last_freed_idx = Some(idx);
    }

    /// Removes `bp` from its size class's list.
    ///
    /// # Safety
    /// `bp` must currently be linked into the class `size` maps to.
    pub unsafe fn unlink(&mut self, bp: NonNull<u8>, size: usize) {
        let idx = class_of(size);
        let (prev, next) = unsafe { (block::prev_in_list(bp), block::next_in_list(bp)) };

        match prev {
            Some(p) => unsafe { block::set_next_in_list(p, next) },
            None => self.heads[idx] = next,
        }
        if let Some(n) = next {
            unsafe { block::set_prev_in_list(n, prev) };
        }
    }

    /// The size class most recently pushed to, if any.
    #[inline]
    pub fn last_freed_idx(&self) -> Option<usize> {
        self.last_freed_idx
    }

    /// Finds the first free block in class `idx` or above whose size is at
    /// least `min_size`. Classes below `idx` are skipped even though a
    /// first-fit search within `idx` may still fail — the caller is expected
    /// to have picked `idx` as the first class able to hold `min_size`.
    ///
    /// # Safety
    /// Every block currently linked into the table must have an accurate
    /// header (used to read its size while scanning).
    pub unsafe fn find_fit(&self, start_idx: usize, min_size: usize) -> Option<NonNull<u8>> {
        for idx in start_idx..NUM_SIZE_CLASSES {
            if let Some(bp) = unsafe { self.find_fit_in_class(idx, min_size) } {
                return Some(bp);
            }
        }
        None
    }

    /// Walks exactly class `idx`'s list for the first free block whose size
    /// is at least `min_size`, without touching any other class.
    ///
    /// # Safety
    /// Same contract as [`Freelists::find_fit`].
    pub unsafe fn find_fit_in_class(&self, idx: usize, min_size: usize) -> Option<NonNull<u8>> {
        let mut cur = self.heads[idx];
        while let Some(bp) = cur {
            if unsafe { block::size(bp) } >= min_size {
                return Some(bp);
            }
            cur = unsafe { block::next_in_list(bp) };
        }
        None
    }
}

impl Default for Freelists {
    fn default() -> Self {
        Self::new()
    }
}

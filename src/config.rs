//! Compile-time configuration surface.
//!
//! Every constant enumerated in the allocator's public contract lives here,
//! mirroring the way this codebase's bootstrap layer centralizes its own
//! compile-time knobs (`PAGE_SIZE`, `BOOTSTRAP_RESERVE_SIZE`) in one module
//! rather than scattering `const` declarations across call sites.

/// Size of a header/footer boundary tag word.
pub const HEADER_SIZE: usize = 4;
/// Size of a header/footer boundary tag word.
pub const FOOTER_SIZE: usize = 4;
/// Size of one free-list link pointer.
pub const LINK_SIZE: usize = core::mem::size_of::<usize>();

/// Smallest block size, inclusive of header, footer, and both free-list
/// links. No block — allocated or free — is ever smaller than this, even
/// when allocated: a block must always be able to hold both links the
/// moment it's freed. An earlier revision of this allocator sized blocks
/// for only one link's worth of payload and wrote both the `next` and
/// `prev` update through that single slot; this crate reserves room for
/// both from the start instead.
pub const MIN_BLOCK_SIZE: usize = HEADER_SIZE + FOOTER_SIZE + 2 * LINK_SIZE;

/// Bookkeeping a requested-size-to-block-size conversion must add: the
/// smallest amount any block, allocated or free, is ever required to hold.
/// Equal to `MIN_BLOCK_SIZE` rather than just the boundary tags, since a
/// block must stay big enough to carry both free-list links the moment it
/// is freed.
pub const OVERHEAD: usize = MIN_BLOCK_SIZE;

/// DWORD alignment granularity; every block size and payload address is a
/// multiple of this.
pub const DWORD: usize = 8;

/// Administrative overhead every slab pays regardless of how it's carved:
/// one word of leading alignment padding, the prologue block, and the
/// zero-size epilogue header.
const ADMIN_OVERHEAD_PER_SLAB: usize = HEADER_SIZE + MIN_BLOCK_SIZE + HEADER_SIZE;

/// Round `n` up to the next multiple of `DWORD`.
#[inline]
pub const fn align_up_dword(n: usize) -> usize {
    (n + (DWORD - 1)) & !(DWORD - 1)
}

/// Size of a single slab mapped from the OS. Targets roughly 4 GiB, capped
/// so that the packed size field (a 32-bit word with the low 3 bits used as
/// flags) can always represent a block's size.
pub const SLAB_SIZE: usize = align_up_dword(u32::MAX as usize - DWORD);

/// Largest single block a slab can hand out: the usable region left after
/// `SLAB_SIZE` pays its administrative overhead.
pub const MAX_BLOCK_SIZE: usize = SLAB_SIZE - ADMIN_OVERHEAD_PER_SLAB;

/// Upper bound on total address space the allocator will reserve across all
/// live slabs at once. Bounds the slab registry's capacity.
pub const MAX_TOTAL_HEAP: usize = 256 * SLAB_SIZE;

/// Slab registry capacity: the number of slab bases it can ever track.
pub const MAX_SLABS: usize = MAX_TOTAL_HEAP / SLAB_SIZE;

/// `release` checks whether a slab can be unmapped every time the running
/// total of frees crosses a multiple of this.
pub const TOTAL_THRESHOLD: u64 = 100;
/// `release` also checks after this many consecutive frees without an
/// intervening allocation, so a long free-only tail doesn't have to wait
/// for the total counter to roll over.
pub const CONSECUTIVE_THRESHOLD: u64 = 10;

/// `ceil(log2(x))` for `x >= 1`, usable at compile time.
const fn ceil_log2(x: usize) -> u32 {
    if x <= 1 {
        return 0;
    }
    let bits = usize::BITS - (x - 1).leading_zeros();
    bits
}

/// Number of segregated size classes: class `i` covers
/// `[MIN_BLOCK_SIZE << i, MIN_BLOCK_SIZE << (i + 1))`.
pub const NUM_SIZE_CLASSES: usize = ceil_log2(MAX_BLOCK_SIZE / MIN_BLOCK_SIZE) as usize + 1;

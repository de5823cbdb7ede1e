//! Error taxonomy for the allocator's recoverable failure modes.
//!
//! `CorruptionDetected` and the undefined-behavior cases (double free,
//! freeing a foreign pointer) are deliberately absent from this type: per
//! design, corruption aborts the process immediately (see
//! [`crate::block::assert_invariant`]) rather than unwinding through a
//! `Result`, and undefined behavior is, by contract, not detected at all.

/// Failure modes `Allocator::allocate` can return.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The OS refused to map a new slab, or the slab registry is full.
    #[error("out of memory: failed to map a new slab")]
    OutOfMemory,
    /// `size` was zero or exceeded `MAX_BLOCK_SIZE`.
    #[error("invalid allocation size")]
    InvalidArgument,
}

//! A single-threaded, mmap-backed dynamic memory allocator.
//!
//! Blocks are tracked with boundary tags (a header and footer word at each
//! end carrying size and allocation state) so physically adjacent blocks
//! can be found and coalesced in O(1) without any external bookkeeping
//! structure. Free blocks are additionally threaded into segregated,
//! doubly-linked free lists by size class for first-fit placement.
//!
//! Backing storage comes from anonymous OS-mapped regions ("slabs"),
//! acquired on demand as existing slabs fill up and released again once a
//! slab's one remaining block, grown back to the slab's full usable size
//! through coalescing, has nothing left allocated in it.
//!
//! The public surface is the C-style [`mm_malloc`] / [`mm_free`] pair; the
//! [`Allocator`] type underneath is exposed for callers who want to drive
//! more than one independent heap, rather than this crate's shared
//! singleton.
//!
//! This allocator is explicitly single-threaded: [`Allocator`] is not
//! `Sync`, and this crate does not implement [`std::alloc::GlobalAlloc`].
//! See the [`allocator`] module for why.

#![warn(missing_docs)]

pub mod allocator;
mod block;
pub mod config;
pub mod error;
mod ffi;
mod freelist;
mod slab;
mod syscall;

pub use allocator::Allocator;
pub use error::AllocError;
pub use ffi::{mm_free, mm_malloc};

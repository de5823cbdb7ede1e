//! Platform glue for reserving and releasing anonymous virtual memory.
//!
//! This is the allocator's only collaborator that talks to the OS directly.
//! Both sides of the `cfg` split return fresh, zero-filled, page-aligned
//! memory, which is all the slab provider relies on.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{map_region, unmap_region};
#[cfg(windows)]
pub use windows::{map_region, unmap_region};

//! Aligned memory buffers with pluggable allocation strategies.

mod allocator;
mod deallocator;
mod raw;


pub use allocator::{AlignedAllocator, Allocator};
pub use deallocator::Deallocator;
pub use raw::Buffer;

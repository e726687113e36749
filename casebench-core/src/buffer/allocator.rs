//! Aligned allocation backed by Rust's global allocator.

use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::sync::Arc;

use crate::error::{Error, Result};

use super::{deallocator::Deallocator, raw::Buffer};

/// Trait for allocating the scratch buffer a generator writes into.
pub trait Allocator: Send + Sync {
    /// Allocates a buffer with the specified capacity.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the memory cannot be provided.
    ///
    /// # Returns
    ///
    /// A [`Buffer`] of exactly `capacity` bytes. For zero capacity an empty
    /// buffer is returned without touching the allocator.
    fn allocate(&self, capacity: usize) -> Result<Buffer>;
}

/// Global-allocator strategy that places the buffer on an `align`-byte boundary.
///
/// The alignment must be a power of two, which is the same requirement
/// `posix_memalign` and [`Layout`] impose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedAllocator {
    align: usize,
}

impl AlignedAllocator {
    /// Creates an allocator for the given alignment in bytes.
    pub fn new(align: usize) -> Self {
        Self { align }
    }

    /// Alignment in bytes guaranteed for every non-empty buffer.
    pub fn align(&self) -> usize {
        self.align
    }
}

/// Deallocator that remembers the original layout used for allocation.
struct LayoutDeallocator {
    layout: Layout,
}

impl Deallocator for LayoutDeallocator {
    fn deallocate(&self, ptr: NonNull<u8>, _capacity: usize) {
        // SAFETY: The pointer was allocated with this exact layout by
        // `AlignedAllocator::allocate` and is released exactly once on drop.
        unsafe {
            alloc::dealloc(ptr.as_ptr(), self.layout);
        }
    }
}

impl Allocator for AlignedAllocator {
    fn allocate(&self, capacity: usize) -> Result<Buffer> {
        if !self.align.is_power_of_two() {
            return Err(Error::InvalidAlignment { align: self.align });
        }

        if capacity == 0 {
            return Ok(Buffer::default());
        }

        let layout = Layout::from_size_align(capacity, self.align)
            .map_err(|_| Error::AllocationFailed { capacity })?;

        // Zeroed memory keeps every byte of the block initialized, including
        // the padding in front of the misaligned window.
        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(ptr).ok_or(Error::AllocationFailed { capacity })?;

        let deallocator = Arc::new(LayoutDeallocator { layout }) as Arc<dyn Deallocator>;

        // SAFETY: We just allocated this pointer with the specified capacity,
        // and the deallocator releases it with the same layout.
        let buffer = unsafe { Buffer::from_raw_parts(ptr, capacity, deallocator) };
        Ok(buffer)
    }
}

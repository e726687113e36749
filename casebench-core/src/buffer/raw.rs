//! Owned, possibly over-aligned byte blocks.

use std::ops::{Deref, DerefMut, Range};
use std::ptr::NonNull;
use std::sync::Arc;

use crate::error::Result;

use super::allocator::{AlignedAllocator, Allocator};
use super::deallocator::{noop_deallocator, Deallocator};

/// An owned block of initialized memory released through its [`Deallocator`].
///
/// Unlike `Vec<u8>`, a [`Buffer`] can be placed on an arbitrary power-of-two
/// boundary, which lets the generator control the address of its first write.
pub struct Buffer {
    /// Start of the block.
    ptr: NonNull<u8>,
    /// Length of the block in bytes.
    capacity: usize,
    /// Releases the block on drop.
    deallocator: Arc<dyn Deallocator>,
}

impl Buffer {
    /// Takes ownership of `capacity` bytes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `capacity` initialized bytes that nothing else
    /// reads, writes or frees, and `deallocator` must be able to release
    /// them.
    pub unsafe fn from_raw_parts(
        ptr: NonNull<u8>,
        capacity: usize,
        deallocator: Arc<dyn Deallocator>,
    ) -> Self {
        Self {
            ptr,
            capacity,
            deallocator,
        }
    }

    /// Allocates `capacity` bytes through `allocator`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if allocation fails.
    pub fn with_allocator<A: Allocator + ?Sized>(allocator: &A, capacity: usize) -> Result<Self> {
        allocator.allocate(capacity)
    }

    /// Allocates a zeroed buffer whose first byte sits on an `align`-byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlignment`](crate::Error::InvalidAlignment) when
    /// `align` is not a power of two, and
    /// [`Error::AllocationFailed`](crate::Error::AllocationFailed) when the
    /// memory cannot be provided.
    pub fn aligned(capacity: usize, align: usize) -> Result<Self> {
        Self::with_allocator(&AlignedAllocator::new(align), capacity)
    }

    /// Size of the whole block in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of the first byte, for alignment checks.
    pub fn base_addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }

    /// The whole block, including bytes outside any window.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: The buffer was constructed with a valid, initialized pointer
        // and capacity, and we maintain exclusive access through ownership.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// Mutable view of the whole block.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: The buffer was constructed with a valid, initialized pointer
        // and capacity, and we maintain exclusive access through ownership.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// Returns the `len`-byte window starting `offset` bytes into the buffer.
    ///
    /// Returns `None` when the window does not fit inside the capacity.
    pub fn window(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let range = window_range(offset, len)?;
        self.as_slice().get(range)
    }

    /// Mutable counterpart of [`window`](Self::window).
    pub fn window_mut(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        let range = window_range(offset, len)?;
        self.as_mut_slice().get_mut(range)
    }
}

fn window_range(offset: usize, len: usize) -> Option<Range<usize>> {
    let end = offset.checked_add(len)?;
    Some(offset..end)
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl Default for Buffer {
    /// An empty block that owns no memory.
    fn default() -> Self {
        let deallocator = Arc::new(noop_deallocator);
        // SAFETY: a zero-length slice over a dangling pointer is valid and
        // the no-op deallocator never frees it.
        unsafe { Self::from_raw_parts(NonNull::dangling(), 0, deallocator) }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("base_addr", &self.base_addr())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

// SAFETY: The pointer is owned exclusively by this buffer and the
// deallocator is required to be Send + Sync.
unsafe impl Send for Buffer {}

// SAFETY: Shared access only hands out immutable slices; mutation requires
// `&mut Buffer`.
unsafe impl Sync for Buffer {}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.deallocator.deallocate(self.ptr, self.capacity);
    }
}
